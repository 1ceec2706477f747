use std::collections::HashSet;

use ordered_float::OrderedFloat;

use crate::PlanError;
use crate::entities::{Marker, Roll};
use crate::util::round3;

/// A validated cut plan together with the roll inventory it is planned against.
/// Read-only across all iterations of a simulation.
#[derive(Debug, Clone)]
pub struct CutPlan {
    markers: Vec<Marker>,
    inventory: Vec<Roll>,
    totals: PlanTotals,
}

impl CutPlan {
    /// Creates a plan whose yield per garment is estimated from the markers.
    pub fn new(markers: Vec<Marker>, inventory: Vec<Roll>) -> Result<Self, PlanError> {
        Self::build(markers, inventory, None)
    }

    /// Creates a plan with an externally determined yield per garment.
    pub fn with_yield(
        markers: Vec<Marker>,
        inventory: Vec<Roll>,
        yield_per_garment: f64,
    ) -> Result<Self, PlanError> {
        Self::build(markers, inventory, Some(yield_per_garment))
    }

    fn build(
        markers: Vec<Marker>,
        inventory: Vec<Roll>,
        yield_per_garment: Option<f64>,
    ) -> Result<Self, PlanError> {
        if markers.is_empty() {
            return Err(PlanError::EmptyCutPlan);
        }
        if let Some(row) = markers.iter().position(|m| m.name().trim().is_empty()) {
            return Err(PlanError::BlankMarkerName { row });
        }
        if let Some(row) = inventory.iter().position(|r| r.id().trim().is_empty()) {
            return Err(PlanError::BlankRollId { row });
        }
        let mut seen = HashSet::new();
        if let Some(dup) = inventory.iter().find(|r| !seen.insert(r.id())) {
            return Err(PlanError::DuplicateRollId(dup.id().to_owned()));
        }

        let totals = PlanTotals::compute(&markers, &inventory, yield_per_garment)?;

        Ok(Self {
            markers,
            inventory,
            totals,
        })
    }

    /// Markers in processing order
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn inventory(&self) -> &[Roll] {
        &self.inventory
    }

    pub fn totals(&self) -> &PlanTotals {
        &self.totals
    }

    pub fn smallest_marker_length(&self) -> f64 {
        self.totals.smallest_marker_length
    }

    pub fn longest_marker_length(&self) -> f64 {
        self.totals.longest_marker_length
    }

    pub fn yield_per_garment(&self) -> f64 {
        self.totals.yield_per_garment
    }
}

/// Plan-level aggregates which do not depend on the allocation process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanTotals {
    /// Sum of all roll lengths in the inventory
    pub total_fabric_uploaded: f64,
    /// Sum of `length * ply_height` over all markers
    pub total_fabric_needed: f64,
    pub total_plies: u64,
    /// Sum of `bundles * ply_height` over all markers
    pub total_garments: u64,
    /// Average fabric length per garment, used to classify leftovers
    pub yield_per_garment: f64,
    pub smallest_marker_length: f64,
    pub longest_marker_length: f64,
}

impl PlanTotals {
    pub fn compute(
        markers: &[Marker],
        inventory: &[Roll],
        yield_per_garment: Option<f64>,
    ) -> Result<Self, PlanError> {
        let lengths = || markers.iter().map(|m| OrderedFloat(m.length()));
        let (Some(smallest), Some(longest)) = (lengths().min(), lengths().max()) else {
            return Err(PlanError::EmptyCutPlan);
        };

        let total_fabric_uploaded = round3(inventory.iter().map(|r| r.length()).sum());
        let total_fabric_needed = round3(markers.iter().map(|m| m.fabric_needed()).sum());
        let checked_sum = |f: fn(&Marker) -> u64| {
            markers
                .iter()
                .try_fold(0u64, |acc, m| acc.checked_add(f(m)))
                .ok_or(PlanError::PlanTooLarge)
        };
        let total_plies = checked_sum(Marker::ply_height)?;
        let total_garments = checked_sum(Marker::garments)?;
        if total_garments == 0 {
            return Err(PlanError::ZeroTotalGarments);
        }

        let yield_per_garment = match yield_per_garment {
            Some(y) => round3(y),
            None => round3(total_fabric_needed / total_garments as f64),
        };
        if !yield_per_garment.is_finite() || yield_per_garment <= 0.0 {
            return Err(PlanError::InvalidYield(yield_per_garment));
        }

        Ok(Self {
            total_fabric_uploaded,
            total_fabric_needed,
            total_plies,
            total_garments,
            yield_per_garment,
            smallest_marker_length: smallest.0,
            longest_marker_length: longest.0,
        })
    }

    /// Reports a shortage when the fabric needed, increased by the fractional `allowance`,
    /// exceeds the fabric uploaded.
    pub fn fabric_shortage(&self, allowance: f64) -> Option<FabricShortage> {
        let needed_with_allowance = round3(self.total_fabric_needed * (1.0 + allowance));
        match needed_with_allowance > self.total_fabric_uploaded {
            true => Some(FabricShortage {
                needed: self.total_fabric_needed,
                needed_with_allowance,
                uploaded: self.total_fabric_uploaded,
            }),
            false => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FabricShortage {
    pub needed: f64,
    pub needed_with_allowance: f64,
    pub uploaded: f64,
}
