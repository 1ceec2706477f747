use crate::entities::{AllocationOutcome, PlanTotals, Roll};
use crate::util::{fit_count, round3};

/// Category of a piece of fabric left over at the end of an iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeftoverClass {
    /// At least as long as the longest marker: fabric saved in roll form
    RollForm,
    /// Shorter than the longest marker, but at least one yield per garment long
    UsableEndBit,
    /// Shorter than one yield per garment
    UnusableBit,
}

impl LeftoverClass {
    /// Classifies a leftover length. The checks are ordered, so every length falls in exactly one class.
    pub fn classify(length: f64, longest_marker_length: f64, yield_per_garment: f64) -> Self {
        if length >= longest_marker_length {
            LeftoverClass::RollForm
        } else if length >= yield_per_garment {
            LeftoverClass::UsableEndBit
        } else {
            LeftoverClass::UnusableBit
        }
    }
}

/// Groups usable end bits by how many yields per garment they hold.
///
/// Band `i` (zero-based) covers `[(i+1)·yield, (i+2)·yield)`, the last band is open-ended.
/// There are `floor(longest_marker / yield)` bands, or none for a degenerate plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndBitBands {
    yield_per_garment: f64,
    n_bands: usize,
}

impl EndBitBands {
    pub fn new(longest_marker_length: f64, yield_per_garment: f64) -> Self {
        let degenerate = !(longest_marker_length > 0.0 && yield_per_garment > 0.0);
        let n_bands = match degenerate {
            true => 0,
            false => fit_count(longest_marker_length, yield_per_garment) as usize,
        };
        Self {
            yield_per_garment,
            n_bands,
        }
    }

    pub fn from_totals(totals: &PlanTotals) -> Self {
        Self::new(totals.longest_marker_length, totals.yield_per_garment)
    }

    pub fn n_bands(&self) -> usize {
        self.n_bands
    }

    /// Index of the band a length falls in, if any
    pub fn band_of(&self, length: f64) -> Option<usize> {
        match fit_count(length, self.yield_per_garment) as usize {
            0 => None,
            _ if self.n_bands == 0 => None,
            multiple => Some(multiple.min(self.n_bands) - 1),
        }
    }

    /// Lower bound (inclusive) and upper bound (exclusive, `None` if open-ended) of a band
    pub fn bounds(&self, band: usize) -> (f64, Option<f64>) {
        let lower = round3((band + 1) as f64 * self.yield_per_garment);
        let upper = match band + 1 < self.n_bands {
            true => Some(round3((band + 2) as f64 * self.yield_per_garment)),
            false => None,
        };
        (lower, upper)
    }

    pub fn label(&self, band: usize) -> String {
        format!("End Bits for {}-{} bundles", band + 1, band + 2)
    }

    /// Counts and sums the pieces falling in each band
    pub fn tally<'a>(&self, pieces: impl IntoIterator<Item = &'a Roll>) -> Vec<BandTally> {
        let mut tallies = vec![BandTally::default(); self.n_bands];
        for piece in pieces {
            if let Some(band) = self.band_of(piece.length()) {
                tallies[band].count += 1;
                tallies[band].length += piece.length();
            }
        }
        tallies.iter_mut().for_each(|t| t.length = round3(t.length));
        tallies
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BandTally {
    pub count: usize,
    pub length: f64,
}

/// Outcome of one full pass over the cut plan with a fresh copy of the inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationResult {
    /// One outcome per marker, in plan order
    pub outcomes: Vec<AllocationOutcome>,
    /// Every piece of fabric left at the end of the iteration
    pub leftovers: Vec<Roll>,
    /// Number of original rolls which were never cut
    pub excess_roll_count: usize,
    /// Total length of the original rolls which were never cut
    pub excess_rolls: f64,
    pub fabric_saved_in_roll_form: f64,
    pub usable_end_bits: f64,
    pub unusable_bits: f64,
    pub ply_shortfall: u64,
    pub shortfall_quantity: u64,
    pub garments_produced: u64,
    /// Usable end bits grouped per [`EndBitBands`]
    pub bands: Vec<BandTally>,
}

impl IterationResult {
    /// Categorizes the leftovers and totals the marker outcomes of an iteration.
    pub fn new(
        outcomes: Vec<AllocationOutcome>,
        leftovers: Vec<Roll>,
        totals: &PlanTotals,
        bands: &EndBitBands,
    ) -> Self {
        let class_of = |r: &Roll| {
            LeftoverClass::classify(
                r.length(),
                totals.longest_marker_length,
                totals.yield_per_garment,
            )
        };
        let sum_of = |class: LeftoverClass| {
            round3(
                leftovers
                    .iter()
                    .filter(|r| class_of(*r) == class)
                    .map(|r| r.length())
                    .sum(),
            )
        };

        let excess_roll_count = leftovers.iter().filter(|r| r.is_original()).count();
        let excess_rolls = round3(
            leftovers
                .iter()
                .filter(|r| r.is_original())
                .map(|r| r.length())
                .sum(),
        );
        let fabric_saved_in_roll_form = sum_of(LeftoverClass::RollForm);
        let usable_end_bits = sum_of(LeftoverClass::UsableEndBit);
        let unusable_bits = sum_of(LeftoverClass::UnusableBit);

        let bands = bands.tally(
            leftovers
                .iter()
                .filter(|r| class_of(*r) == LeftoverClass::UsableEndBit),
        );

        Self {
            ply_shortfall: outcomes.iter().map(|o| o.ply_shortfall()).sum(),
            shortfall_quantity: outcomes.iter().map(|o| o.shortfall_quantity()).sum(),
            garments_produced: outcomes.iter().map(|o| o.garments_produced()).sum(),
            outcomes,
            leftovers,
            excess_roll_count,
            excess_rolls,
            fabric_saved_in_roll_form,
            usable_end_bits,
            unusable_bits,
            bands,
        }
    }

    /// Total length of all leftovers
    pub fn leftover_length(&self) -> f64 {
        round3(self.leftovers.iter().map(|r| r.length()).sum())
    }

    /// Total plies cut over all markers
    pub fn plies_planned(&self) -> u64 {
        self.outcomes.iter().map(|o| o.plies_planned).sum()
    }
}
