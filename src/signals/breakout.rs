//! Volume-confirmed breakout detection.

use std::collections::BTreeMap;

use crate::common::math;
use crate::config::DetectorConfig;
use crate::models::{EnrichedBar, Signal, SignalDirection, SignalKind};

/// Scan the trailing lookback window for a breakout: the latest close above
/// every prior high in the window, on volume at least `volume_factor` times
/// the prior mean. The latest bar is excluded from both reference statistics.
///
/// Score is the percentage above the prior high, capped at 10. Always
/// bullish; at most one signal per call.
pub fn detect_breakout(
    ticker: &str,
    bars: &[EnrichedBar],
    cfg: &DetectorConfig,
) -> Option<Signal> {
    if bars.is_empty() {
        return None;
    }
    let start = bars.len().saturating_sub(cfg.breakout_lookback);
    let recent = &bars[start..];
    let (prior, latest) = recent.split_at(recent.len() - 1);
    if prior.is_empty() {
        return None;
    }
    let latest = &latest[0];

    let prior_high = prior.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max);
    let prior_volumes: Vec<f64> = prior.iter().map(|b| b.volume).collect();
    let prior_volume = math::mean(&prior_volumes);

    if latest.close > prior_high && latest.volume >= prior_volume * cfg.volume_factor {
        let score = ((latest.close - prior_high) / prior_high * 100.0).min(10.0);
        let volume_factor = if prior_volume != 0.0 {
            math::round2(latest.volume / prior_volume)
        } else {
            0.0
        };
        let mut details = BTreeMap::new();
        details.insert("close".to_string(), latest.close);
        details.insert("prior_high".to_string(), prior_high);
        details.insert("volume_factor".to_string(), volume_factor);
        return Some(Signal {
            ticker: ticker.to_string(),
            indicator: SignalKind::Breakout,
            direction: SignalDirection::Bullish,
            score: math::round2(score),
            details,
        });
    }
    None
}
