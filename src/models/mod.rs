//! Shared data models spanning the engine layers.

pub mod candle;
pub mod fundamentals;
pub mod signal;
pub mod strategy;

pub use candle::{Candle, EnrichedBar};
pub use fundamentals::FundamentalSummary;
pub use signal::{Signal, SignalDirection, SignalKind};
pub use strategy::StrategyResult;
