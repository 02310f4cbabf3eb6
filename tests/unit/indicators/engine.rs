//! Unit tests for the indicator enrichment engine

use chrono::{Duration, TimeZone, Utc};
use equitix::config::IndicatorConfig;
use equitix::indicators::{compute, IndicatorError};
use equitix::models::Candle;

fn create_test_candles(count: usize, base_price: f64, step: f64) -> Vec<Candle> {
    let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            let close = base_price + i as f64 * step;
            Candle::new(
                close - 0.1,
                close + 0.5,
                close - 0.7,
                close,
                1_000.0,
                start + Duration::days(i as i64),
            )
        })
        .collect()
}

#[test]
fn test_empty_input() {
    let out = compute(&[], &IndicatorConfig::default()).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_insufficient_history_returns_empty() {
    // Largest default window is 20; 19 periods cannot fill it.
    let candles = create_test_candles(19, 100.0, 0.5);
    let out = compute(&candles, &IndicatorConfig::default()).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_warmup_rows_are_dropped() {
    let candles = create_test_candles(60, 100.0, 0.5);
    let out = compute(&candles, &IndicatorConfig::default()).unwrap();
    // First 19 rows lack at least one 20-period column.
    assert_eq!(out.len(), 41);
    assert_eq!(out[0].timestamp, candles[19].timestamp);

    let candles = create_test_candles(20, 100.0, 0.5);
    let out = compute(&candles, &IndicatorConfig::default()).unwrap();
    assert_eq!(out.len(), 1);
}

#[test]
fn test_monotonic_uptrend_maxes_rsi_and_macd() {
    let candles = create_test_candles(120, 100.0, 0.5);
    let out = compute(&candles, &IndicatorConfig::default()).unwrap();
    let last = out.last().unwrap();
    // No down periods: average loss is zero, RSI forced to 100.
    assert_eq!(last.rsi, 100.0);
    assert!(last.macd > last.macd_signal);
    assert!(last.macd > 0.0);
}

#[test]
fn test_column_values_on_last_row() {
    let candles = create_test_candles(60, 100.0, 0.5);
    let out = compute(&candles, &IndicatorConfig::default()).unwrap();
    let last = out.last().unwrap();

    let closes: Vec<f64> = candles[40..].iter().map(|c| c.close).collect();
    let expected_sma = closes.iter().sum::<f64>() / 20.0;
    assert!((last.sma - expected_sma).abs() < 1e-9);

    let expected_resistance = candles[40..]
        .iter()
        .map(|c| c.high)
        .fold(f64::NEG_INFINITY, f64::max);
    let expected_support = candles[40..].iter().map(|c| c.low).fold(f64::INFINITY, f64::min);
    assert!((last.resistance - expected_resistance).abs() < 1e-9);
    assert!((last.support - expected_support).abs() < 1e-9);

    assert!(last.bb_upper > last.bb_lower);
    assert!(last.stoch_k >= 0.0 && last.stoch_k <= 100.0);
    assert!(last.stoch_d >= 0.0 && last.stoch_d <= 100.0);

    // High-low span is 1.2, gap to previous close is step + 0.5 = 1.0
    assert!((last.atr - 1.2).abs() < 1e-9);
}

#[test]
fn test_flat_series_has_undefined_stochastic() {
    // Identical bars leave the high/low range empty, so %K never defines
    // and every row is dropped.
    let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let candles: Vec<Candle> = (0..60)
        .map(|i| Candle::new(100.0, 100.0, 100.0, 100.0, 1_000.0, start + Duration::days(i)))
        .collect();
    let out = compute(&candles, &IndicatorConfig::default()).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_unordered_timestamps_are_malformed() {
    let mut candles = create_test_candles(30, 100.0, 0.5);
    let ts = candles[5].timestamp;
    candles[5].timestamp = candles[6].timestamp;
    candles[6].timestamp = ts;
    let err = compute(&candles, &IndicatorConfig::default()).unwrap_err();
    assert!(matches!(err, IndicatorError::MalformedSeries(_)));
}

#[test]
fn test_duplicate_timestamps_are_malformed() {
    let mut candles = create_test_candles(30, 100.0, 0.5);
    candles[10].timestamp = candles[9].timestamp;
    assert!(compute(&candles, &IndicatorConfig::default()).is_err());
}

#[test]
fn test_ohlc_bounds_are_enforced() {
    let mut candles = create_test_candles(30, 100.0, 0.5);
    candles[3].high = candles[3].close - 1.0;
    assert!(compute(&candles, &IndicatorConfig::default()).is_err());

    let mut candles = create_test_candles(30, 100.0, 0.5);
    candles[7].volume = -1.0;
    assert!(compute(&candles, &IndicatorConfig::default()).is_err());

    let mut candles = create_test_candles(30, 100.0, 0.5);
    candles[2].close = f64::NAN;
    assert!(compute(&candles, &IndicatorConfig::default()).is_err());
}
