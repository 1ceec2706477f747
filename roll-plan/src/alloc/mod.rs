mod aggregator;
mod iteration_runner;
mod marker_allocator;
mod progress;

#[doc(inline)]
pub use aggregator::Aggregator;
#[doc(inline)]
pub use aggregator::aggregate;
#[doc(inline)]
pub use iteration_runner::IterationRunner;
#[doc(inline)]
pub use marker_allocator::allocate_marker;
#[doc(inline)]
pub use progress::ProgressHook;
