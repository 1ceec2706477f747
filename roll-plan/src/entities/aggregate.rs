use crate::entities::IterationResult;

/// Averages over all iterations of a simulation, and the percentages derived from them.
///
/// Length-like averages are rounded to 3 decimals, count-like averages to 1 decimal.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateResult {
    pub n_iterations: usize,
    pub avg_excess_rolls: f64,
    pub avg_excess_roll_count: f64,
    pub avg_fabric_saved_in_roll_form: f64,
    pub avg_usable_end_bits: f64,
    pub avg_unusable_bits: f64,
    pub avg_ply_shortfall: f64,
    pub avg_shortfall_quantity: f64,
    pub avg_garments_produced: f64,
    /// (usable end bits + unusable bits) relative to the total fabric needed
    pub wastage_pct: f64,
    pub usable_end_bits_pct: f64,
    /// Relative to the total plies required
    pub ply_shortfall_pct: f64,
    /// Relative to the total garments of the plan
    pub shortfall_quantity_pct: f64,
    /// Relative to the total garments of the plan
    pub garments_produced_pct: f64,
    pub bands: Vec<BandSummary>,
    /// Raw per-iteration results, only retained when requested
    pub iterations: Vec<IterationResult>,
}

/// Average content of one usable end bit band
#[derive(Debug, Clone, PartialEq)]
pub struct BandSummary {
    pub label: String,
    pub lower_bound: f64,
    /// `None` for the open-ended last band
    pub upper_bound: Option<f64>,
    pub avg_count: f64,
    pub avg_length: f64,
}

impl BandSummary {
    /// Average number of end bits, floored for display
    pub fn display_count(&self) -> u64 {
        self.avg_count.floor() as u64
    }
}
