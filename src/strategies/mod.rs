//! Strategy scoring, ranking, and the end-to-end facade.

pub mod engine;
pub mod ranker;

pub use engine::StrategyEngine;
pub use ranker::{rank, score_for_strategy, IndicatorSnapshot, DEFAULT_TEMPLATES};
