use float_cmp::approx_eq;

use crate::entities::{CutPlan, IterationResult, LeftoverClass};

/// Every marker outcome stays within its ply height and its counts add up.
pub fn outcomes_are_consistent(plan: &CutPlan, result: &IterationResult) -> bool {
    result.outcomes.len() == plan.markers().len()
        && plan
            .markers()
            .iter()
            .zip(result.outcomes.iter())
            .all(|(marker, outcome)| {
                outcome.plies_planned <= marker.ply_height()
                    && outcome.plies_planned + outcome.ply_shortfall() == marker.ply_height()
                    && outcome.garments_produced() == outcome.plies_planned * marker.bundles()
                    && outcome.shortfall_quantity() == outcome.ply_shortfall() * marker.bundles()
            })
}

/// The leftovers are exactly what was uploaded minus what was cut into plies.
pub fn iteration_conserves_fabric(plan: &CutPlan, result: &IterationResult) -> bool {
    let fabric_cut: f64 = plan
        .markers()
        .iter()
        .zip(result.outcomes.iter())
        .map(|(marker, outcome)| marker.length() * outcome.plies_planned as f64)
        .sum();
    let expected = plan.totals().total_fabric_uploaded - fabric_cut;
    approx_eq!(f64, expected, result.leftover_length(), epsilon = 1e-6)
}

/// Roll-form, usable and unusable leftovers together account for all leftover fabric.
pub fn leftovers_are_partitioned(result: &IterationResult) -> bool {
    let categorized =
        result.fabric_saved_in_roll_form + result.usable_end_bits + result.unusable_bits;
    approx_eq!(f64, categorized, result.leftover_length(), epsilon = 1e-6)
}

/// Number of leftover pieces per class, in the order roll-form, usable, unusable.
pub fn leftover_class_counts(
    plan: &CutPlan,
    result: &IterationResult,
) -> (usize, usize, usize) {
    let mut counts = (0, 0, 0);
    for piece in result.leftovers.iter() {
        match LeftoverClass::classify(
            piece.length(),
            plan.longest_marker_length(),
            plan.yield_per_garment(),
        ) {
            LeftoverClass::RollForm => counts.0 += 1,
            LeftoverClass::UsableEndBit => counts.1 += 1,
            LeftoverClass::UnusableBit => counts.2 += 1,
        }
    }
    counts
}
