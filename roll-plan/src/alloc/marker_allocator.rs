use log::{debug, trace};
use rand::Rng;

use crate::entities::{AllocationOutcome, Marker, Roll, RollPool};
use crate::util::{fit_count, remainder};

/// Allocates rolls from the pool to a single marker.
///
/// In order:
/// 1. if no roll in the pool is at least as long as the marker, nothing is touched and the
///    full ply height is reported as shortfall.
/// 2. the single longest residual roll that fits the marker is cut first.
/// 3. regular rolls are drawn in a fresh random order while plies are missing.
///    Rolls too short for the marker are set aside and returned afterwards.
/// 4. the remaining residual rolls are drawn longest-first while plies are missing.
/// 5. every fragment cut off in steps 2-4 is offered back to the pool as a residual.
///    Fragments shorter than `smallest_marker_length` become terminal bits.
pub fn allocate_marker(
    marker: &Marker,
    pool: &mut RollPool,
    smallest_marker_length: f64,
    rng: &mut impl Rng,
) -> AllocationOutcome {
    let mut outcome = AllocationOutcome::new(marker);

    if !pool.any_fits(marker.length()) {
        debug!(
            "[ALLOC] marker {} infeasible: no roll of at least {}",
            marker.name(), marker.length()
        );
        return outcome;
    }

    if let Some(roll) = pool.take_longest_residual(marker.length()) {
        if let Err(roll) = cut_plies(marker, roll, pool, &mut outcome) {
            //a residual that fits the marker always yields a ply, this is never reached in practice
            outcome.terminal_bits.push(roll);
        }
    }

    if !outcome.is_complete() {
        pool.shuffle_regular(rng);
        let mut set_aside = vec![];
        while !outcome.is_complete() {
            let Some(roll) = pool.pop_regular() else {
                break;
            };
            if let Err(roll) = cut_plies(marker, roll, pool, &mut outcome) {
                set_aside.push(roll);
            }
        }
        pool.return_regular(set_aside);
    }

    if !outcome.is_complete() {
        let mut set_aside = vec![];
        while !outcome.is_complete() {
            let Some(roll) = pool.pop_longest_residual() else {
                break;
            };
            if let Err(roll) = cut_plies(marker, roll, pool, &mut outcome) {
                set_aside.push(roll);
            }
        }
        pool.return_residual(set_aside);
    }

    for fragment in outcome.residual_fragments.clone() {
        if let Some(bit) = pool.offer_fragment(fragment, smallest_marker_length) {
            outcome.terminal_bits.push(bit);
        }
    }

    debug!(
        "[ALLOC] marker {}: {}/{} plies from {} rolls, {} fragments ({} terminal)",
        marker.name(),
        outcome.plies_planned,
        marker.ply_height(),
        outcome.selected_rolls.len(),
        outcome.residual_fragments.len(),
        outcome.terminal_bits.len()
    );

    outcome
}

/// Cuts as many plies as needed (and possible) from `roll`.
/// Hands the roll back untouched if it cannot yield a single ply.
fn cut_plies(
    marker: &Marker,
    roll: Roll,
    pool: &mut RollPool,
    outcome: &mut AllocationOutcome,
) -> Result<(), Roll> {
    let plies = fit_count(roll.length(), marker.length()).min(outcome.remaining_plies());
    if plies == 0 {
        trace!("[ALLOC] roll {} ({}) too short", roll.id(), roll.length());
        return Err(roll);
    }

    outcome.plies_planned += plies;
    let rest = remainder(roll.length(), marker.length(), plies);
    trace!(
        "[ALLOC] roll {} ({}): {} plies, {} left",
        roll.id(),
        roll.length(),
        plies,
        rest
    );
    if rest > 0.0 {
        let id = pool.fragment_id(roll.id());
        outcome.residual_fragments.push(Roll::fragment(id, rest));
    }
    outcome.selected_rolls.push(roll);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::RollKind;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn pool_of(lengths: &[f64]) -> RollPool {
        let rolls = lengths
            .iter()
            .enumerate()
            .map(|(i, l)| Roll::original(format!("R{i}"), *l).unwrap())
            .collect_vec();
        RollPool::new(&rolls)
    }

    fn sorted_lengths<'a>(rolls: impl IntoIterator<Item = &'a Roll>) -> Vec<f64> {
        rolls
            .into_iter()
            .map(|r| r.length())
            .sorted_by(|a, b| a.total_cmp(b))
            .collect()
    }

    #[test]
    fn infeasible_marker_leaves_pool_untouched() {
        let marker = Marker::new("M", 50.0, 4, 3).unwrap();
        let mut pool = pool_of(&[10.0, 20.0, 49.999]);
        let before = pool.clone();
        let mut rng = SmallRng::seed_from_u64(0);

        let outcome = allocate_marker(&marker, &mut pool, 50.0, &mut rng);

        assert_eq!(outcome.plies_planned, 0);
        assert_eq!(outcome.ply_shortfall(), 4);
        assert_eq!(outcome.shortfall_quantity(), 12);
        assert_eq!(outcome.garments_produced(), 0);
        assert!(outcome.selected_rolls.is_empty());
        assert_eq!(pool.regular(), before.regular());
        assert_eq!(pool.residual(), before.residual());
    }

    #[test]
    fn three_plies_from_three_rolls() {
        let marker = Marker::new("M", 10.0, 3, 2).unwrap();
        for seed in 0..32 {
            let mut pool = pool_of(&[12.0, 12.0, 25.0]);
            let mut rng = SmallRng::seed_from_u64(seed);
            let outcome = allocate_marker(&marker, &mut pool, 10.0, &mut rng);

            assert_eq!(outcome.plies_planned, 3);
            assert_eq!(outcome.ply_shortfall(), 0);
            assert_eq!(outcome.garments_produced(), 6);

            //depending on the draw order, the long roll is opened first or last
            let fragments = sorted_lengths(&outcome.residual_fragments);
            match outcome.selected_rolls.len() {
                3 => {
                    assert_eq!(fragments, vec![2.0, 2.0, 15.0]);
                    assert_eq!(sorted_lengths(&outcome.terminal_bits), vec![2.0, 2.0]);
                    assert_eq!(sorted_lengths(pool.residual()), vec![15.0]);
                    assert!(pool.regular().is_empty());
                }
                2 => {
                    assert_eq!(fragments, vec![2.0, 5.0]);
                    assert_eq!(sorted_lengths(&outcome.terminal_bits), vec![2.0, 5.0]);
                    assert!(pool.residual().is_empty());
                    assert_eq!(sorted_lengths(pool.regular()), vec![12.0]);
                }
                n => panic!("unexpected number of selected rolls: {n}"),
            }
        }
    }

    #[test]
    fn single_longest_residual_is_used_first() {
        let marker = Marker::new("M", 4.0, 2, 1).unwrap();
        let mut pool = pool_of(&[100.0]);
        for (parent, length) in [("A", 5.0), ("B", 9.0), ("C", 6.0)] {
            let id = pool.fragment_id(parent);
            assert!(pool.offer_fragment(Roll::fragment(id, length), 4.0).is_none());
        }
        let mut rng = SmallRng::seed_from_u64(7);

        let outcome = allocate_marker(&marker, &mut pool, 4.0, &mut rng);

        assert_eq!(outcome.plies_planned, 2);
        assert_eq!(outcome.selected_rolls.len(), 1);
        assert_eq!(outcome.selected_rolls[0].id(), "B-bit");
        assert_eq!(outcome.residual_fragments.len(), 1);
        assert_eq!(outcome.residual_fragments[0].id(), "B-bit-bit");
        assert_eq!(outcome.residual_fragments[0].kind(), RollKind::Fragment);
        //1.0 is below the smallest marker length
        assert_eq!(sorted_lengths(&outcome.terminal_bits), vec![1.0]);
        //the original roll was never opened
        assert_eq!(sorted_lengths(pool.regular()), vec![100.0]);
        assert_eq!(sorted_lengths(pool.residual()), vec![5.0, 6.0]);
    }

    #[test]
    fn regular_rolls_are_preferred_over_remaining_residuals() {
        let marker = Marker::new("M", 4.0, 3, 1).unwrap();
        let mut pool = pool_of(&[4.0, 4.0]);
        for (parent, length) in [("A", 4.0), ("B", 4.0)] {
            let id = pool.fragment_id(parent);
            assert!(pool.offer_fragment(Roll::fragment(id, length), 4.0).is_none());
        }
        let mut rng = SmallRng::seed_from_u64(1);

        let outcome = allocate_marker(&marker, &mut pool, 4.0, &mut rng);

        //one residual first, then both regular rolls
        assert_eq!(outcome.plies_planned, 3);
        let used = outcome.selected_rolls.iter().map(|r| r.id()).collect_vec();
        assert_eq!(used[0], "A-bit");
        assert!(used[1..].iter().all(|id| id.starts_with('R')));
        assert!(pool.regular().is_empty());
        assert_eq!(pool.residual().len(), 1);
        assert_eq!(pool.residual()[0].id(), "B-bit");
    }

    #[test]
    fn residuals_fill_in_after_regular_rolls_run_out() {
        let marker = Marker::new("M", 3.0, 4, 1).unwrap();
        let mut pool = pool_of(&[3.0, 2.0]);
        for (parent, length) in [("A", 3.0), ("B", 6.5), ("C", 1.0)] {
            let id = pool.fragment_id(parent);
            assert!(pool.offer_fragment(Roll::fragment(id, length), 1.0).is_none());
        }
        let mut rng = SmallRng::seed_from_u64(3);

        let outcome = allocate_marker(&marker, &mut pool, 1.0, &mut rng);

        //B-bit: 2 plies, R0: 1 ply, A-bit: 1 ply
        assert_eq!(outcome.plies_planned, 4);
        let used = outcome.selected_rolls.iter().map(|r| r.id()).collect_vec();
        assert_eq!(used, vec!["B-bit", "R0", "A-bit"]);
        //the 2.0 roll is too short and was set aside, C-bit never drawn
        assert_eq!(sorted_lengths(pool.regular()), vec![2.0]);
        //the 0.5 fragment of B-bit is below the smallest marker length
        assert_eq!(sorted_lengths(pool.residual()), vec![1.0]);
        assert_eq!(sorted_lengths(&outcome.terminal_bits), vec![0.5]);
    }

    #[test]
    fn partial_fill_reports_shortfall() {
        let marker = Marker::new("M", 10.0, 5, 3).unwrap();
        let mut pool = pool_of(&[10.0, 25.0, 7.0]);
        let mut rng = SmallRng::seed_from_u64(11);

        let outcome = allocate_marker(&marker, &mut pool, 10.0, &mut rng);

        assert_eq!(outcome.plies_planned, 3);
        assert_eq!(outcome.ply_shortfall(), 2);
        assert_eq!(outcome.shortfall_quantity(), 6);
        assert_eq!(outcome.garments_produced(), 9);
        assert_eq!(sorted_lengths(pool.regular()), vec![7.0]);
        assert_eq!(sorted_lengths(&outcome.terminal_bits), vec![5.0]);
    }

    #[test]
    fn exact_fit_produces_no_fragment() {
        let marker = Marker::new("M", 2.5, 4, 1).unwrap();
        let mut pool = pool_of(&[10.0]);
        let mut rng = SmallRng::seed_from_u64(0);

        let outcome = allocate_marker(&marker, &mut pool, 2.5, &mut rng);

        assert_eq!(outcome.plies_planned, 4);
        assert!(outcome.residual_fragments.is_empty());
        assert!(outcome.terminal_bits.is_empty());
        assert!(pool.is_empty());
    }
}
