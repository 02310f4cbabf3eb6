//! Chart-pattern detectors over an enriched series snapshot.
//!
//! Each detector is a pure function returning at most one [`Signal`] per
//! call. Detectors read only the OHLCV fields of the enriched bars; the
//! derived columns exist for the strategy ranker.

pub mod breakout;
pub mod double_extreme;

pub use breakout::detect_breakout;
pub use double_extreme::detect_double_extreme;

use crate::config::DetectorConfig;
use crate::models::{EnrichedBar, Signal};

/// Run every detector in a fixed order and collect whatever fired.
pub fn detect_all(ticker: &str, bars: &[EnrichedBar], cfg: &DetectorConfig) -> Vec<Signal> {
    let mut signals = Vec::new();
    if let Some(signal) = detect_breakout(ticker, bars, cfg) {
        signals.push(signal);
    }
    if let Some(signal) = detect_double_extreme(ticker, bars, cfg) {
        signals.push(signal);
    }
    signals
}
