//! Unit tests for the end-to-end analysis facade

use std::collections::BTreeMap;

use chrono::{Duration, TimeZone, Utc};
use equitix::config::AnalysisConfig;
use equitix::models::Candle;
use equitix::strategies::StrategyEngine;

fn create_test_candles(count: usize, breakout_finish: bool) -> Vec<Candle> {
    let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            let base = 100.0 + i as f64 * 0.3;
            let last = breakout_finish && i == count - 1;
            let close = if last { base + 4.0 } else { base };
            let volume = if last { 2_500_000.0 } else { 1_000_000.0 };
            Candle::new(
                base - 0.2,
                close + 0.5,
                base - 0.6,
                close,
                volume,
                start + Duration::days(i as i64),
            )
        })
        .collect()
}

fn sample_metrics() -> BTreeMap<String, f64> {
    BTreeMap::from([
        ("roe".to_string(), 21.0),
        ("pe_ratio".to_string(), 18.5),
        ("debt_to_equity".to_string(), 0.4),
        ("sales_growth_3y".to_string(), 12.0),
        ("profit_growth_3y".to_string(), 17.0),
    ])
}

#[test]
fn test_analyze_ranks_default_templates() {
    let candles = create_test_candles(120, true);
    let cfg = AnalysisConfig::default();
    let results = StrategyEngine::analyze("TEST", &candles, &sample_metrics(), &cfg).unwrap();

    assert_eq!(results.len(), 3);
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for result in &results {
        assert_eq!(result.ticker, "TEST");
        assert!(result.stop < result.entry);
        assert!(result.target > result.entry);
        assert!(result.score >= 0.0 && result.score <= 100.0);
        assert!(!result.reasons.is_empty());
    }
}

#[test]
fn test_analyze_is_deterministic() {
    let candles = create_test_candles(120, true);
    let cfg = AnalysisConfig::default();
    let first = StrategyEngine::analyze("TEST", &candles, &sample_metrics(), &cfg).unwrap();
    let second = StrategyEngine::analyze("TEST", &candles, &sample_metrics(), &cfg).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_analyze_with_short_history_yields_no_strategies() {
    let candles = create_test_candles(10, false);
    let cfg = AnalysisConfig::default();
    let results = StrategyEngine::analyze("TEST", &candles, &sample_metrics(), &cfg).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_analyze_rejects_malformed_series() {
    let mut candles = create_test_candles(120, false);
    candles[4].timestamp = candles[3].timestamp;
    let cfg = AnalysisConfig::default();
    assert!(StrategyEngine::analyze("TEST", &candles, &sample_metrics(), &cfg).is_err());
}
