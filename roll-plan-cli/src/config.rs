use serde::{Deserialize, Serialize};

use roll_plan::util::SimConfig;

/// Configuration for a roll planning run
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct RollPlanConfig {
    /// Configuration of the simulation itself
    pub sim: SimConfig,
    /// Seed for the PRNG. If undefined, the simulation runs in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Fraction added to the fabric needed before comparing it to the fabric uploaded
    pub fabric_allowance: f64,
    /// Yield per garment to use instead of the one in the cut plan or the estimated one
    pub yield_per_garment: Option<f64>,
}

impl Default for RollPlanConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            prng_seed: None,
            fabric_allowance: 0.02,
            yield_per_garment: None,
        }
    }
}
