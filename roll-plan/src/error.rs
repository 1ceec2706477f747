use thiserror::Error;

/// Reasons a cut plan, roll inventory or simulation setup is rejected before any iteration runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    #[error("cut plan contains no markers")]
    EmptyCutPlan,

    #[error("marker at row {row} has no name")]
    BlankMarkerName { row: usize },

    #[error("marker {marker}: length must be a positive number, got {length}")]
    InvalidMarkerLength { marker: String, length: f64 },

    #[error("marker {marker}: ply height must be at least 1")]
    ZeroPlyHeight { marker: String },

    #[error("marker {marker}: bundles must be at least 1")]
    ZeroBundles { marker: String },

    #[error("marker {marker}: number of garments does not fit in 64 bits")]
    TooManyGarments { marker: String },

    #[error("roll at row {row} has no identifier")]
    BlankRollId { row: usize },

    #[error("roll identifier {0} appears more than once in the inventory")]
    DuplicateRollId(String),

    #[error("roll {roll}: length must be a non-negative number, got {length}")]
    InvalidRollLength { roll: String, length: f64 },

    #[error("yield per garment must be a positive number, got {0}")]
    InvalidYield(f64),

    #[error("cut plan requires more garments or plies than fit in 64 bits")]
    PlanTooLarge,

    #[error("cut plan requires zero garments")]
    ZeroTotalGarments,

    #[error("number of iterations must be at least 1")]
    ZeroIterations,
}
