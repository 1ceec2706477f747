use serde::{Deserialize, Serialize};

/// Number of random roll plans simulated when not configured otherwise.
pub const DEFAULT_N_ITERATIONS: usize = 50;

/// Configuration of the [`Aggregator`](crate::alloc::Aggregator)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of independent roll plans (iterations) to simulate
    pub n_iterations: usize,
    /// Run the iterations on the rayon thread pool. Results do not depend on this setting.
    pub parallel: bool,
    /// Keep the raw result of every iteration in the aggregate for diagnostics
    pub keep_iterations: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            n_iterations: DEFAULT_N_ITERATIONS,
            parallel: true,
            keep_iterations: false,
        }
    }
}
