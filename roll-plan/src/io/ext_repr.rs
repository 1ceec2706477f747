use serde::{Deserialize, Serialize};

/// A cut plan together with the roll inventory it should be cut from
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtCutPlan {
    /// The name of the plan
    pub name: String,
    /// Markers in processing order
    pub markers: Vec<ExtMarker>,
    /// Roll inventory
    pub rolls: Vec<ExtRoll>,
    /// Externally estimated yield per garment. Derived from the markers if absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yield_per_garment: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtMarker {
    pub name: String,
    /// Fabric length consumed by one ply
    pub length: f64,
    /// Number of plies required
    pub ply_height: u64,
    /// Garments produced per ply
    pub bundles: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtRoll {
    pub id: String,
    pub length: f64,
}

/// Averaged outcome of a simulation of a cut plan
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtReport {
    pub totals: ExtPlanTotals,
    pub summary: ExtSummary,
    /// Usable end bits grouped by multiples of the yield per garment
    pub end_bit_bands: Vec<ExtBand>,
    /// Raw results per iteration, only present when requested
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub iterations: Vec<ExtIteration>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlanTotals {
    pub total_fabric_uploaded: f64,
    pub total_fabric_needed: f64,
    pub total_plies: u64,
    pub total_garments: u64,
    pub yield_per_garment: f64,
    pub smallest_marker_length: f64,
    pub longest_marker_length: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSummary {
    pub n_iterations: usize,
    pub avg_excess_rolls: f64,
    pub avg_excess_roll_count: f64,
    pub avg_fabric_saved_in_roll_form: f64,
    pub avg_usable_end_bits: f64,
    pub usable_end_bits_pct: f64,
    pub avg_unusable_bits: f64,
    pub wastage_pct: f64,
    pub avg_ply_shortfall: f64,
    pub ply_shortfall_pct: f64,
    pub avg_shortfall_quantity: f64,
    pub shortfall_quantity_pct: f64,
    pub avg_garments_produced: f64,
    pub garments_produced_pct: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtBand {
    pub label: String,
    pub lower_bound: f64,
    /// Absent for the open-ended last band
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<f64>,
    /// Average number of end bits, floored
    pub avg_count: u64,
    pub avg_length: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtIteration {
    pub excess_rolls: f64,
    pub fabric_saved_in_roll_form: f64,
    pub usable_end_bits: f64,
    pub unusable_bits: f64,
    pub ply_shortfall: u64,
    pub shortfall_quantity: u64,
    pub garments_produced: u64,
    pub markers: Vec<ExtMarkerOutcome>,
    pub leftovers: Vec<ExtRoll>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtMarkerOutcome {
    pub marker: String,
    pub plies_planned: u64,
    pub ply_shortfall: u64,
    /// Identifiers of the rolls consumed, in order of use
    pub rolls_used: Vec<String>,
}
