use serde::{Deserialize, Serialize};

use crate::PlanError;
use crate::util::round3;

/// Suffix appended to the identifier of a roll to name the fragment cut from it
pub const FRAGMENT_SUFFIX: &str = "-bit";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RollKind {
    /// A roll from the uploaded inventory
    Original,
    /// An end bit left over after cutting plies from another roll
    Fragment,
}

/// A single length of fabric. Immutable: cutting a roll consumes it and may create a new fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct Roll {
    id: String,
    length: f64,
    kind: RollKind,
}

impl Roll {
    /// Creates a roll of the original inventory. The length is rounded to 3 decimals.
    pub fn original(id: impl Into<String>, length: f64) -> Result<Self, PlanError> {
        let id = id.into();
        let length = round3(length);
        if !length.is_finite() || length < 0.0 {
            return Err(PlanError::InvalidRollLength { roll: id, length });
        }
        Ok(Self {
            id,
            length,
            kind: RollKind::Original,
        })
    }

    pub(crate) fn fragment(id: String, length: f64) -> Self {
        debug_assert!(length > 0.0);
        Self {
            id,
            length: round3(length),
            kind: RollKind::Fragment,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn kind(&self) -> RollKind {
        self.kind
    }

    pub fn is_original(&self) -> bool {
        self.kind == RollKind::Original
    }
}
