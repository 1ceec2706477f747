use crate::PlanError;
use crate::util::round3;

/// A cutting layout template: every ply consumes `length` of fabric and yields `bundles` garments.
/// Immutable once created, and only obtainable through [`Marker::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    name: String,
    /// Fabric length consumed by one ply, rounded to 3 decimals
    length: f64,
    /// Number of plies required
    ply_height: u64,
    /// Garments produced per ply
    bundles: u64,
    garments: u64,
}

impl Marker {
    pub fn new(
        name: impl Into<String>,
        length: f64,
        ply_height: u64,
        bundles: u64,
    ) -> Result<Self, PlanError> {
        let name = name.into();
        let length = round3(length);
        if !length.is_finite() || length <= 0.0 {
            return Err(PlanError::InvalidMarkerLength {
                marker: name,
                length,
            });
        }
        if ply_height == 0 {
            return Err(PlanError::ZeroPlyHeight { marker: name });
        }
        if bundles == 0 {
            return Err(PlanError::ZeroBundles { marker: name });
        }
        let Some(garments) = ply_height.checked_mul(bundles) else {
            return Err(PlanError::TooManyGarments { marker: name });
        };
        Ok(Self {
            name,
            length,
            ply_height,
            bundles,
            garments,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn ply_height(&self) -> u64 {
        self.ply_height
    }

    pub fn bundles(&self) -> u64 {
        self.bundles
    }

    /// Fabric needed to cut every ply of this marker
    pub fn fabric_needed(&self) -> f64 {
        self.length * self.ply_height as f64
    }

    /// Garments produced when every ply is cut
    pub fn garments(&self) -> u64 {
        self.garments
    }
}
