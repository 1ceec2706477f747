//! The `roll-plan` simulation core: allocates an inventory of fabric rolls to the markers of a
//! cut plan under a randomized greedy policy and measures the resulting waste and shortfall.

/// Marker allocation, single iterations and the aggregation of many iterations
pub mod alloc;

/// Entities to model cut plans, roll inventories and simulation results
pub mod entities;

/// Typed validation errors
pub mod error;

/// Importing cut plans into and exporting reports out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

#[doc(inline)]
pub use error::PlanError;
