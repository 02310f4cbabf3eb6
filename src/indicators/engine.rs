//! Indicator enrichment pass: raw OHLCV series in, derived-column series out.
//!
//! All columns are computed over the full input, then rows where any column
//! is still undefined are dropped. With default windows that removes the
//! first 19 periods, so callers must treat an empty result as insufficient
//! history rather than an error.

use tracing::debug;

use crate::common::math;
use crate::config::IndicatorConfig;
use crate::indicators::IndicatorError;
use crate::models::{Candle, EnrichedBar};

/// Compute the enriched series for `candles`.
///
/// Pure transform: the input is read-only and the output freshly allocated.
pub fn compute(
    candles: &[Candle],
    cfg: &IndicatorConfig,
) -> Result<Vec<EnrichedBar>, IndicatorError> {
    validate(candles)?;
    if candles.is_empty() {
        return Ok(Vec::new());
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let highs: Vec<f64> = candles.iter().map(|c| c.high).collect();
    let lows: Vec<f64> = candles.iter().map(|c| c.low).collect();

    let sma = rolling_mean(&closes, cfg.sma_window);
    let ema_fast = math::ema_series(&closes, cfg.ema_fast_span);
    let ema_mid = math::ema_series(&closes, cfg.ema_mid_span);
    let ema_slow = math::ema_series(&closes, cfg.ema_slow_span);
    let rsi = rsi_series(&closes, cfg.rsi_window);

    let macd_fast = math::ema_series(&closes, cfg.macd_fast_span);
    let macd_slow = math::ema_series(&closes, cfg.macd_slow_span);
    let macd: Vec<f64> = macd_fast
        .iter()
        .zip(&macd_slow)
        .map(|(f, s)| f - s)
        .collect();
    let macd_signal = math::ema_series(&macd, cfg.macd_signal_span);

    let atr = atr_series(candles, cfg.atr_window);
    let (bb_upper, bb_lower) = bollinger_series(&closes, cfg.bollinger_window, cfg.bollinger_std);
    let stoch_k = stochastic_k_series(&closes, &highs, &lows, cfg.stoch_k_window);
    let stoch_d = rolling_mean_opt(&stoch_k, cfg.stoch_d_window);
    let support = rolling_min(&lows, cfg.range_window);
    let resistance = rolling_max(&highs, cfg.range_window);

    let mut out = Vec::with_capacity(candles.len());
    for (i, candle) in candles.iter().enumerate() {
        let row = (|| {
            Some(EnrichedBar {
                timestamp: candle.timestamp,
                open: candle.open,
                high: candle.high,
                low: candle.low,
                close: candle.close,
                volume: candle.volume,
                sma: sma[i]?,
                ema_fast: ema_fast[i],
                ema_mid: ema_mid[i],
                ema_slow: ema_slow[i],
                rsi: rsi[i]?,
                macd: macd[i],
                macd_signal: macd_signal[i],
                atr: atr[i]?,
                bb_upper: bb_upper[i]?,
                bb_lower: bb_lower[i]?,
                stoch_k: stoch_k[i]?,
                stoch_d: stoch_d[i]?,
                support: support[i]?,
                resistance: resistance[i]?,
            })
        })();
        if let Some(row) = row {
            out.push(row);
        }
    }

    debug!(
        input_rows = candles.len(),
        enriched_rows = out.len(),
        "indicator enrichment complete"
    );
    Ok(out)
}

fn validate(candles: &[Candle]) -> Result<(), IndicatorError> {
    for (i, c) in candles.iter().enumerate() {
        let fields = [c.open, c.high, c.low, c.close, c.volume];
        if fields.iter().any(|v| !v.is_finite()) {
            return Err(IndicatorError::MalformedSeries(format!(
                "non-finite OHLCV field at row {i}"
            )));
        }
        if c.volume < 0.0 {
            return Err(IndicatorError::MalformedSeries(format!(
                "negative volume at row {i}"
            )));
        }
        if c.low > c.open.min(c.close) || c.high < c.open.max(c.close) {
            return Err(IndicatorError::MalformedSeries(format!(
                "OHLC bounds violated at row {i}"
            )));
        }
        if i > 0 && candles[i - 1].timestamp >= c.timestamp {
            return Err(IndicatorError::MalformedSeries(format!(
                "timestamps not strictly increasing at row {i}"
            )));
        }
    }
    Ok(())
}

/// Trailing mean over `window` values; undefined until the window fills.
fn rolling_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    values
        .iter()
        .enumerate()
        .map(|(i, _)| {
            if i + 1 < window {
                None
            } else {
                Some(math::mean(&values[i + 1 - window..=i]))
            }
        })
        .collect()
}

/// Trailing mean over an already-partial column; a window containing any
/// undefined value is itself undefined.
fn rolling_mean_opt(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    (0..values.len())
        .map(|i| {
            if i + 1 < window {
                return None;
            }
            let slice = &values[i + 1 - window..=i];
            let mut sum = 0.0;
            for v in slice {
                sum += (*v)?;
            }
            Some(sum / window as f64)
        })
        .collect()
}

fn rolling_max(values: &[f64], window: usize) -> Vec<Option<f64>> {
    (0..values.len())
        .map(|i| {
            if i + 1 < window {
                None
            } else {
                values[i + 1 - window..=i]
                    .iter()
                    .copied()
                    .reduce(f64::max)
            }
        })
        .collect()
}

fn rolling_min(values: &[f64], window: usize) -> Vec<Option<f64>> {
    (0..values.len())
        .map(|i| {
            if i + 1 < window {
                None
            } else {
                values[i + 1 - window..=i]
                    .iter()
                    .copied()
                    .reduce(f64::min)
            }
        })
        .collect()
}

/// RSI over trailing close deltas. A window with zero average loss reads as
/// maximal strength (100) instead of dividing by zero.
fn rsi_series(closes: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut gains = vec![0.0; closes.len()];
    let mut losses = vec![0.0; closes.len()];
    for i in 1..closes.len() {
        let delta = closes[i] - closes[i - 1];
        if delta > 0.0 {
            gains[i] = delta;
        } else {
            losses[i] = -delta;
        }
    }

    (0..closes.len())
        .map(|i| {
            // The first delta exists at row 1, so the window fills at `window`.
            if i < window {
                return None;
            }
            let avg_gain = math::mean(&gains[i + 1 - window..=i]);
            let avg_loss = math::mean(&losses[i + 1 - window..=i]);
            if avg_loss == 0.0 {
                return Some(100.0);
            }
            let rs = avg_gain / avg_loss;
            Some(100.0 - 100.0 / (1.0 + rs))
        })
        .collect()
}

/// Rolling mean of the true range; true range needs a previous close, so the
/// column fills one row later than a plain rolling window.
fn atr_series(candles: &[Candle], window: usize) -> Vec<Option<f64>> {
    let mut tr = vec![0.0; candles.len()];
    for i in 1..candles.len() {
        tr[i] = math::true_range(candles[i].high, candles[i].low, candles[i - 1].close);
    }

    (0..candles.len())
        .map(|i| {
            if i < window {
                None
            } else {
                Some(math::mean(&tr[i + 1 - window..=i]))
            }
        })
        .collect()
}

fn bollinger_series(
    closes: &[f64],
    window: usize,
    num_std: f64,
) -> (Vec<Option<f64>>, Vec<Option<f64>>) {
    let mut upper = Vec::with_capacity(closes.len());
    let mut lower = Vec::with_capacity(closes.len());
    for i in 0..closes.len() {
        if i + 1 < window {
            upper.push(None);
            lower.push(None);
            continue;
        }
        let slice = &closes[i + 1 - window..=i];
        let mid = math::mean(slice);
        let std = math::sample_std(slice);
        upper.push(Some(mid + num_std * std));
        lower.push(Some(mid - num_std * std));
    }
    (upper, lower)
}

/// %K of the stochastic oscillator. A flat high/low range leaves the row
/// undefined, which drops it from the enriched series.
fn stochastic_k_series(
    closes: &[f64],
    highs: &[f64],
    lows: &[f64],
    window: usize,
) -> Vec<Option<f64>> {
    (0..closes.len())
        .map(|i| {
            if i + 1 < window {
                return None;
            }
            let low_min = lows[i + 1 - window..=i].iter().copied().reduce(f64::min)?;
            let high_max = highs[i + 1 - window..=i].iter().copied().reduce(f64::max)?;
            if high_max == low_min {
                return None;
            }
            Some(100.0 * (closes[i] - low_min) / (high_max - low_min))
        })
        .collect()
}
