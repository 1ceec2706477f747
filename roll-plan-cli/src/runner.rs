use anyhow::{Context, Result};
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::prelude::SmallRng;
use thousands::Separable;

use roll_plan::alloc::Aggregator;
use roll_plan::entities::{AggregateResult, PlanTotals};
use roll_plan::io::ext_repr::ExtCutPlan;

use crate::config::RollPlanConfig;
use crate::io::output::RollPlanOutput;

/// Validates the cut plan, runs the configured number of random roll plans and builds the report.
pub fn run(ext_plan: ExtCutPlan, config: RollPlanConfig) -> Result<RollPlanOutput> {
    let plan = roll_plan::io::import(&ext_plan, config.yield_per_garment)
        .with_context(|| format!("invalid cut plan: {}", ext_plan.name))?;
    let totals = plan.totals();
    log_totals(totals);

    if let Some(shortage) = totals.fabric_shortage(config.fabric_allowance) {
        warn!(
            "[MAIN] insufficient fabric: needed {} plus {:.1}% allowance ({:.3}) exceeds uploaded {}, expect incomplete plies and a garment shortfall",
            shortage.needed,
            config.fabric_allowance * 100.0,
            shortage.needed_with_allowance,
            shortage.uploaded
        );
    }

    let prng_seed = config.prng_seed.unwrap_or_else(rand::random);
    let mut rng = SmallRng::seed_from_u64(prng_seed);
    info!("[MAIN] PRNG seed: {prng_seed}");

    let aggregator = Aggregator::new(&plan, config.sim)?;
    let progress = |completed: usize, total: usize| {
        debug!("[SIM] roll plan {completed}/{total} done");
    };
    let result = aggregator.run_with_progress(&mut rng, &progress)?;
    log_result(&result);

    Ok(RollPlanOutput {
        report: roll_plan::io::export(totals, &result),
        cut_plan: ext_plan,
        config,
        prng_seed,
    })
}

fn log_totals(totals: &PlanTotals) {
    info!("[MAIN] total fabric uploaded: {}", totals.total_fabric_uploaded);
    info!("[MAIN] total fabric needed in markers: {}", totals.total_fabric_needed);
    info!(
        "[MAIN] total number of garments: {} in {} plies",
        totals.total_garments.separate_with_commas(),
        totals.total_plies.separate_with_commas()
    );
    info!("[MAIN] yield per garment: {}", totals.yield_per_garment);
}

fn log_result(result: &AggregateResult) {
    info!("[MAIN] averages over {} roll plans:", result.n_iterations);
    info!("[MAIN]   fabric in excess rolls: {}", result.avg_excess_rolls);
    info!("[MAIN]   fabric saved in roll form: {}", result.avg_fabric_saved_in_roll_form);
    info!(
        "[MAIN]   usable end bits: {} ({}%)",
        result.avg_usable_end_bits, result.usable_end_bits_pct
    );
    info!("[MAIN]   unusable fabric: {}", result.avg_unusable_bits);
    info!("[MAIN]   total wastage: {}%", result.wastage_pct);
    info!(
        "[MAIN]   ply shortfall: {} ({}%)",
        result.avg_ply_shortfall, result.ply_shortfall_pct
    );
    info!(
        "[MAIN]   shortfall quantity: {} ({}%)",
        result.avg_shortfall_quantity, result.shortfall_quantity_pct
    );
    info!(
        "[MAIN]   garments cut: {} ({}%)",
        result.avg_garments_produced, result.garments_produced_pct
    );
    for band in result.bands.iter() {
        info!(
            "[MAIN]   {}: {} end bits, {} fabric",
            band.label,
            band.display_count(),
            band.avg_length
        );
    }
}
