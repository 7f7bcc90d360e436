//! Path helpers shared by the walker and the analyzer.

pub mod paths;

#[doc(inline)]
pub use paths::{normalize, relative_to};
