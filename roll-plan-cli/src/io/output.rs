use serde::{Deserialize, Serialize};

use roll_plan::io::ext_repr::{ExtCutPlan, ExtReport};

use crate::config::RollPlanConfig;

/// Document written at the end of a run: the input, the report and the config that produced it
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RollPlanOutput {
    pub cut_plan: ExtCutPlan,
    pub report: ExtReport,
    pub config: RollPlanConfig,
    /// Seed the simulation ran with, so an entropy-seeded run can be repeated
    pub prng_seed: u64,
}
