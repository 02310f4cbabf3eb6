//! Technical-indicator enrichment layer.

pub mod engine;
pub mod error;

pub use engine::compute;
pub use error::IndicatorError;
