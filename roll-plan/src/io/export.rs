use crate::entities::{AggregateResult, IterationResult, PlanTotals};
use crate::io::ext_repr::{
    ExtBand, ExtIteration, ExtMarkerOutcome, ExtPlanTotals, ExtReport, ExtRoll, ExtSummary,
};

/// Exports the aggregate result of a simulation out of the library
pub fn export(totals: &PlanTotals, result: &AggregateResult) -> ExtReport {
    ExtReport {
        totals: export_totals(totals),
        summary: ExtSummary {
            n_iterations: result.n_iterations,
            avg_excess_rolls: result.avg_excess_rolls,
            avg_excess_roll_count: result.avg_excess_roll_count,
            avg_fabric_saved_in_roll_form: result.avg_fabric_saved_in_roll_form,
            avg_usable_end_bits: result.avg_usable_end_bits,
            usable_end_bits_pct: result.usable_end_bits_pct,
            avg_unusable_bits: result.avg_unusable_bits,
            wastage_pct: result.wastage_pct,
            avg_ply_shortfall: result.avg_ply_shortfall,
            ply_shortfall_pct: result.ply_shortfall_pct,
            avg_shortfall_quantity: result.avg_shortfall_quantity,
            shortfall_quantity_pct: result.shortfall_quantity_pct,
            avg_garments_produced: result.avg_garments_produced,
            garments_produced_pct: result.garments_produced_pct,
        },
        end_bit_bands: result
            .bands
            .iter()
            .map(|b| ExtBand {
                label: b.label.clone(),
                lower_bound: b.lower_bound,
                upper_bound: b.upper_bound,
                avg_count: b.display_count(),
                avg_length: b.avg_length,
            })
            .collect(),
        iterations: result.iterations.iter().map(export_iteration).collect(),
    }
}

pub fn export_totals(totals: &PlanTotals) -> ExtPlanTotals {
    ExtPlanTotals {
        total_fabric_uploaded: totals.total_fabric_uploaded,
        total_fabric_needed: totals.total_fabric_needed,
        total_plies: totals.total_plies,
        total_garments: totals.total_garments,
        yield_per_garment: totals.yield_per_garment,
        smallest_marker_length: totals.smallest_marker_length,
        longest_marker_length: totals.longest_marker_length,
    }
}

fn export_iteration(it: &IterationResult) -> ExtIteration {
    ExtIteration {
        excess_rolls: it.excess_rolls,
        fabric_saved_in_roll_form: it.fabric_saved_in_roll_form,
        usable_end_bits: it.usable_end_bits,
        unusable_bits: it.unusable_bits,
        ply_shortfall: it.ply_shortfall,
        shortfall_quantity: it.shortfall_quantity,
        garments_produced: it.garments_produced,
        markers: it
            .outcomes
            .iter()
            .map(|o| ExtMarkerOutcome {
                marker: o.marker.clone(),
                plies_planned: o.plies_planned,
                ply_shortfall: o.ply_shortfall(),
                rolls_used: o.selected_rolls.iter().map(|r| r.id().to_owned()).collect(),
            })
            .collect(),
        leftovers: it
            .leftovers
            .iter()
            .map(|r| ExtRoll {
                id: r.id().to_owned(),
                length: r.length(),
            })
            .collect(),
    }
}
