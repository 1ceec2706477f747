use itertools::Itertools;
use log::trace;
use rand::Rng;

use crate::alloc::allocate_marker;
use crate::entities::{CutPlan, EndBitBands, IterationResult, RollPool};
use crate::util::assertions;

/// Runs the marker allocator over every marker of a plan, once.
#[derive(Debug, Clone, Copy)]
pub struct IterationRunner<'a> {
    plan: &'a CutPlan,
    bands: EndBitBands,
}

impl<'a> IterationRunner<'a> {
    pub fn new(plan: &'a CutPlan) -> Self {
        Self {
            plan,
            bands: EndBitBands::from_totals(plan.totals()),
        }
    }

    pub fn plan(&self) -> &'a CutPlan {
        self.plan
    }

    pub fn bands(&self) -> &EndBitBands {
        &self.bands
    }

    /// Allocates a fresh copy of the inventory to the markers in plan order.
    /// Everything left in the pool afterwards, together with the terminal bits, forms the leftovers.
    pub fn run(&self, rng: &mut impl Rng) -> IterationResult {
        let mut pool = RollPool::new(self.plan.inventory());
        let smallest_marker_length = self.plan.smallest_marker_length();

        let outcomes = self
            .plan
            .markers()
            .iter()
            .map(|marker| allocate_marker(marker, &mut pool, smallest_marker_length, rng))
            .collect_vec();

        let terminal_bits = outcomes
            .iter()
            .flat_map(|o| o.terminal_bits.iter().cloned())
            .collect_vec();
        let leftovers = pool.into_rolls().chain(terminal_bits).collect_vec();

        let result = IterationResult::new(outcomes, leftovers, self.plan.totals(), &self.bands);

        trace!(
            "[ITER] {} plies short, {} garments, {} leftover pieces",
            result.ply_shortfall,
            result.garments_produced,
            result.leftovers.len()
        );
        debug_assert!(assertions::outcomes_are_consistent(self.plan, &result));
        debug_assert!(assertions::iteration_conserves_fabric(self.plan, &result));
        debug_assert!(assertions::leftovers_are_partitioned(&result));

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Marker, Roll};
    use float_cmp::approx_eq;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn plan(markers: Vec<Marker>, lengths: &[f64], yield_per_garment: f64) -> CutPlan {
        let rolls = lengths
            .iter()
            .enumerate()
            .map(|(i, l)| Roll::original(format!("R{i}"), *l).unwrap())
            .collect_vec();
        CutPlan::with_yield(markers, rolls, yield_per_garment).unwrap()
    }

    #[test]
    fn single_marker_scenario() {
        let plan = plan(vec![Marker::new("M", 10.0, 3, 2).unwrap()], &[12.0, 12.0, 25.0], 5.0);
        let runner = IterationRunner::new(&plan);
        for seed in 0..32 {
            let result = runner.run(&mut SmallRng::seed_from_u64(seed));

            assert_eq!(result.ply_shortfall, 0);
            assert_eq!(result.shortfall_quantity, 0);
            assert_eq!(result.garments_produced, 6);
            assert!(approx_eq!(f64, result.leftover_length(), 19.0, epsilon = 1e-9));

            if result.excess_roll_count == 1 {
                //long roll opened before the second short one: 12 untouched, a 5 and a 2 end bit
                assert_eq!(result.excess_rolls, 12.0);
                assert_eq!(result.fabric_saved_in_roll_form, 12.0);
                assert_eq!(result.usable_end_bits, 5.0);
                assert_eq!(result.unusable_bits, 2.0);
            } else {
                //both short rolls opened first: a 15 residual and two 2 end bits
                assert_eq!(result.excess_roll_count, 0);
                assert_eq!(result.excess_rolls, 0.0);
                assert_eq!(result.fabric_saved_in_roll_form, 15.0);
                assert_eq!(result.usable_end_bits, 0.0);
                assert_eq!(result.unusable_bits, 4.0);
            }
        }
    }

    #[test]
    fn residual_of_one_marker_serves_the_next() {
        let markers = vec![
            Marker::new("long", 10.0, 1, 1).unwrap(),
            Marker::new("short", 4.0, 2, 1).unwrap(),
        ];
        let plan = plan(markers, &[19.0], 2.0);
        let result = IterationRunner::new(&plan).run(&mut SmallRng::seed_from_u64(0));

        assert_eq!(result.outcomes[0].plies_planned, 1);
        assert_eq!(result.outcomes[1].plies_planned, 2);
        assert_eq!(result.outcomes[1].selected_rolls[0].id(), "R0-bit");
        assert_eq!(result.leftovers.len(), 1);
        assert_eq!(result.leftovers[0].id(), "R0-bit-bit");
        assert_eq!(result.leftovers[0].length(), 1.0);
        assert_eq!(result.unusable_bits, 1.0);
    }

    #[test]
    fn infeasible_marker_does_not_block_later_markers() {
        let markers = vec![
            Marker::new("huge", 50.0, 2, 3).unwrap(),
            Marker::new("small", 5.0, 2, 1).unwrap(),
        ];
        let plan = plan(markers, &[10.0, 12.0], 5.0);
        let result = IterationRunner::new(&plan).run(&mut SmallRng::seed_from_u64(5));

        assert_eq!(result.outcomes[0].ply_shortfall(), 2);
        assert_eq!(result.outcomes[0].shortfall_quantity(), 6);
        assert_eq!(result.outcomes[1].plies_planned, 2);
        assert_eq!(result.ply_shortfall, 2);
        assert_eq!(result.shortfall_quantity, 6);
        assert_eq!(result.garments_produced, 2);
    }

    #[test]
    fn same_seed_same_result() {
        let markers = vec![
            Marker::new("A", 3.2, 10, 2).unwrap(),
            Marker::new("B", 2.7, 8, 3).unwrap(),
            Marker::new("C", 1.9, 12, 1).unwrap(),
        ];
        let plan = plan(markers, &[11.5, 20.0, 7.3, 15.25, 9.9, 30.0, 4.4], 1.5);
        let runner = IterationRunner::new(&plan);
        let first = runner.run(&mut SmallRng::seed_from_u64(42));
        let second = runner.run(&mut SmallRng::seed_from_u64(42));
        assert_eq!(first, second);
    }
}
