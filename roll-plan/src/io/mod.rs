/// External representations of cut plans and reports, (de)serializable with serde
pub mod ext_repr;

mod export;
mod import;

#[doc(inline)]
pub use export::{export, export_totals};
#[doc(inline)]
pub use import::import;
