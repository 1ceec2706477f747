use itertools::Itertools;
use log::debug;

use crate::PlanError;
use crate::entities::{CutPlan, Marker, Roll};
use crate::io::ext_repr::ExtCutPlan;

/// Imports a cut plan into the library, validating every marker and roll.
/// A `yield_override` takes precedence over the yield stored in the plan.
pub fn import(ext_plan: &ExtCutPlan, yield_override: Option<f64>) -> Result<CutPlan, PlanError> {
    let markers = ext_plan
        .markers
        .iter()
        .map(|m| Marker::new(m.name.clone(), m.length, m.ply_height, m.bundles))
        .collect::<Result<Vec<Marker>, PlanError>>()?;

    let rolls = ext_plan
        .rolls
        .iter()
        .map(|r| Roll::original(r.id.clone(), r.length))
        .collect::<Result<Vec<Roll>, PlanError>>()?;

    debug!(
        "[IMPORT] {}: markers [{}], {} rolls",
        ext_plan.name,
        markers.iter().map(|m| m.name()).join(", "),
        rolls.len()
    );

    match yield_override.or(ext_plan.yield_per_garment) {
        Some(y) => CutPlan::with_yield(markers, rolls, y),
        None => CutPlan::new(markers, rolls),
    }
}
