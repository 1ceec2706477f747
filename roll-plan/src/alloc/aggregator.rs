use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use itertools::Itertools;
use log::info;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use thousands::Separable;

use crate::PlanError;
use crate::alloc::{IterationRunner, ProgressHook};
use crate::entities::{AggregateResult, BandSummary, CutPlan, EndBitBands, IterationResult, PlanTotals};
use crate::util::{SimConfig, round1, round3};

/// Runs many independent iterations of a plan and averages their results.
pub struct Aggregator<'a> {
    runner: IterationRunner<'a>,
    config: SimConfig,
}

impl<'a> Aggregator<'a> {
    pub fn new(plan: &'a CutPlan, config: SimConfig) -> Result<Self, PlanError> {
        if config.n_iterations == 0 {
            return Err(PlanError::ZeroIterations);
        }
        Ok(Self {
            runner: IterationRunner::new(plan),
            config,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn run(&self, rng: &mut impl Rng) -> Result<AggregateResult, PlanError> {
        self.run_with_progress(rng, &|_: usize, _: usize| {})
    }

    /// Runs all iterations, reporting every completed one to `progress`.
    ///
    /// Every iteration gets its own [`SmallRng`], seeded from `rng` up front,
    /// so the result for a given `rng` does not depend on whether iterations run in parallel.
    pub fn run_with_progress(
        &self,
        rng: &mut impl Rng,
        progress: &impl ProgressHook,
    ) -> Result<AggregateResult, PlanError> {
        let start = Instant::now();
        let plan = self.runner.plan();
        let n_iterations = self.config.n_iterations;
        info!(
            "[SIM] running {} roll plans: {} markers, {} rolls",
            n_iterations,
            plan.markers().len(),
            plan.inventory().len().separate_with_commas()
        );

        let seeds = (0..n_iterations).map(|_| rng.random::<u64>()).collect_vec();
        let completed = AtomicUsize::new(0);
        let run_seeded = |seed: &u64| {
            let result = self.runner.run(&mut SmallRng::seed_from_u64(*seed));
            let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
            progress.iteration_completed(done, n_iterations);
            result
        };

        let iterations: Vec<IterationResult> = match self.config.parallel {
            true => seeds.par_iter().map(run_seeded).collect(),
            false => seeds.iter().map(run_seeded).collect(),
        };

        let aggregate = aggregate(
            plan.totals(),
            self.runner.bands(),
            iterations,
            self.config.keep_iterations,
        )?;

        info!(
            "[SIM] {} roll plans finished in {:.3}ms, avg ply shortfall {}, avg garments cut {}",
            n_iterations,
            start.elapsed().as_secs_f64() * 1000.0,
            aggregate.avg_ply_shortfall,
            aggregate.avg_garments_produced
        );

        Ok(aggregate)
    }
}

/// Averages a set of iteration results and derives the percentages relative to the plan totals.
pub fn aggregate(
    totals: &PlanTotals,
    bands: &EndBitBands,
    iterations: Vec<IterationResult>,
    keep_iterations: bool,
) -> Result<AggregateResult, PlanError> {
    if iterations.is_empty() {
        return Err(PlanError::ZeroIterations);
    }
    let mean = |f: fn(&IterationResult) -> f64| mean_of(&iterations, f);

    let avg_excess_rolls = round3(mean(|it| it.excess_rolls));
    let avg_excess_roll_count = round1(mean(|it| it.excess_roll_count as f64));
    let avg_fabric_saved_in_roll_form = round3(mean(|it| it.fabric_saved_in_roll_form));
    let avg_usable_end_bits = round3(mean(|it| it.usable_end_bits));
    let avg_unusable_bits = round3(mean(|it| it.unusable_bits));
    let avg_ply_shortfall = round1(mean(|it| it.ply_shortfall as f64));
    let avg_shortfall_quantity = round1(mean(|it| it.shortfall_quantity as f64));
    let avg_garments_produced = round1(mean(|it| it.garments_produced as f64));

    let pct = |value: f64, total: f64| value / total * 100.0;
    let fabric_needed = totals.total_fabric_needed;
    let total_plies = totals.total_plies as f64;
    let total_garments = totals.total_garments as f64;

    let band_summaries = (0..bands.n_bands())
        .map(|band| {
            let (lower_bound, upper_bound) = bands.bounds(band);
            let tally = |it: &IterationResult| it.bands.get(band).copied().unwrap_or_default();
            BandSummary {
                label: bands.label(band),
                lower_bound,
                upper_bound,
                avg_count: round3(mean_of(&iterations, |it| tally(it).count as f64)),
                avg_length: round3(mean_of(&iterations, |it| tally(it).length)),
            }
        })
        .collect_vec();

    Ok(AggregateResult {
        n_iterations: iterations.len(),
        avg_excess_rolls,
        avg_excess_roll_count,
        avg_fabric_saved_in_roll_form,
        avg_usable_end_bits,
        avg_unusable_bits,
        avg_ply_shortfall,
        avg_shortfall_quantity,
        avg_garments_produced,
        wastage_pct: round3(pct(avg_usable_end_bits + avg_unusable_bits, fabric_needed)),
        usable_end_bits_pct: round3(pct(avg_usable_end_bits, fabric_needed)),
        ply_shortfall_pct: round1(pct(avg_ply_shortfall, total_plies)),
        shortfall_quantity_pct: round1(pct(avg_shortfall_quantity, total_garments)),
        garments_produced_pct: round1(pct(avg_garments_produced, total_garments)),
        bands: band_summaries,
        iterations: match keep_iterations {
            true => iterations,
            false => vec![],
        },
    })
}

fn mean_of(iterations: &[IterationResult], f: impl Fn(&IterationResult) -> f64) -> f64 {
    iterations.iter().map(f).sum::<f64>() / iterations.len() as f64
}
