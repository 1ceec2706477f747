mod aggregate;
mod iteration;
mod marker;
mod outcome;
mod plan;
mod roll;
mod roll_pool;

#[doc(inline)]
pub use aggregate::AggregateResult;
#[doc(inline)]
pub use aggregate::BandSummary;
#[doc(inline)]
pub use iteration::BandTally;
#[doc(inline)]
pub use iteration::EndBitBands;
#[doc(inline)]
pub use iteration::IterationResult;
#[doc(inline)]
pub use iteration::LeftoverClass;
#[doc(inline)]
pub use marker::Marker;
#[doc(inline)]
pub use outcome::AllocationOutcome;
#[doc(inline)]
pub use plan::CutPlan;
#[doc(inline)]
pub use plan::FabricShortage;
#[doc(inline)]
pub use plan::PlanTotals;
#[doc(inline)]
pub use roll::FRAGMENT_SUFFIX;
#[doc(inline)]
pub use roll::Roll;
#[doc(inline)]
pub use roll::RollKind;
#[doc(inline)]
pub use roll_pool::RollPool;
