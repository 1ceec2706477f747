/// Set of functions used throughout to assure the correctness of the library.
pub mod assertions;

mod config;
mod rounding;

#[doc(inline)]
pub use config::DEFAULT_N_ITERATIONS;
#[doc(inline)]
pub use config::SimConfig;
#[doc(inline)]
pub use rounding::{fit_count, remainder, round1, round3};
