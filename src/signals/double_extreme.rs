//! Double top / double bottom reversal detection.

use std::collections::BTreeMap;

use crate::common::math;
use crate::config::DetectorConfig;
use crate::models::{EnrichedBar, Signal, SignalDirection, SignalKind};

/// Look for two comparable extremes in the trailing lookback window.
///
/// The two highest highs form a bearish double top when they differ by less
/// than `extreme_tolerance` of the window's mean close; otherwise the two
/// lowest lows are checked the same way for a bullish double bottom. Double
/// top wins when both hold. Fixed score of 6.0 either way. Returns nothing
/// when fewer than `double_extreme_lookback` bars exist.
pub fn detect_double_extreme(
    ticker: &str,
    bars: &[EnrichedBar],
    cfg: &DetectorConfig,
) -> Option<Signal> {
    let lookback = cfg.double_extreme_lookback;
    if bars.len() < lookback {
        return None;
    }
    let window = &bars[bars.len() - lookback..];

    let mut highs: Vec<f64> = window.iter().map(|b| b.high).collect();
    let mut lows: Vec<f64> = window.iter().map(|b| b.low).collect();
    highs.sort_by(f64::total_cmp);
    lows.sort_by(f64::total_cmp);

    let top_diff = (highs[lookback - 1] - highs[lookback - 2]).abs();
    let bottom_diff = (lows[1] - lows[0]).abs();

    let closes: Vec<f64> = window.iter().map(|b| b.close).collect();
    let tolerance = math::mean(&closes) * cfg.extreme_tolerance;

    if top_diff < tolerance {
        let mut details = BTreeMap::new();
        details.insert("tops_diff".to_string(), top_diff);
        return Some(Signal {
            ticker: ticker.to_string(),
            indicator: SignalKind::DoubleTop,
            direction: SignalDirection::Bearish,
            score: 6.0,
            details,
        });
    }
    if bottom_diff < tolerance {
        let mut details = BTreeMap::new();
        details.insert("bottoms_diff".to_string(), bottom_diff);
        return Some(Signal {
            ticker: ticker.to_string(),
            indicator: SignalKind::DoubleBottom,
            direction: SignalDirection::Bullish,
            score: 6.0,
            details,
        });
    }
    None
}
