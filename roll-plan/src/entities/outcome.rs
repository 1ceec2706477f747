use crate::entities::{Marker, Roll};

/// Result of allocating rolls to one [`Marker`] within one iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationOutcome {
    pub marker: String,
    pub ply_height: u64,
    pub bundles: u64,
    /// Number of plies that could be cut, never more than `ply_height`
    pub plies_planned: u64,
    /// Rolls (original or residual) consumed by this marker
    pub selected_rolls: Vec<Roll>,
    /// Every fragment cut off while serving this marker
    pub residual_fragments: Vec<Roll>,
    /// Pieces which leave circulation: fragments too short for any marker,
    /// and residual rolls which turned out unusable for this marker
    pub terminal_bits: Vec<Roll>,
}

impl AllocationOutcome {
    pub fn new(marker: &Marker) -> Self {
        Self {
            marker: marker.name().to_owned(),
            ply_height: marker.ply_height(),
            bundles: marker.bundles(),
            plies_planned: 0,
            selected_rolls: vec![],
            residual_fragments: vec![],
            terminal_bits: vec![],
        }
    }

    pub fn remaining_plies(&self) -> u64 {
        self.ply_height - self.plies_planned
    }

    pub fn is_complete(&self) -> bool {
        self.plies_planned >= self.ply_height
    }

    pub fn ply_shortfall(&self) -> u64 {
        self.ply_height - self.plies_planned
    }

    pub fn shortfall_quantity(&self) -> u64 {
        self.ply_shortfall() * self.bundles
    }

    pub fn garments_produced(&self) -> u64 {
        self.plies_planned * self.bundles
    }
}
