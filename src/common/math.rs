//! Rolling-statistics primitives shared by the indicator and signal layers.

/// Arithmetic mean of a non-empty slice. Returns 0.0 for an empty slice so
/// callers can branch on their own emptiness checks instead of unwrapping.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (ddof = 1), matching the convention of the
/// volatility-band formula. Returns 0.0 for fewer than two values.
pub fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / (values.len() - 1) as f64;
    var.sqrt()
}

/// Exponential moving average over the whole series, one output per input.
///
/// Smoothing factor `2 / (span + 1)`, seeded at the first value with no bias
/// adjustment, so the output is defined from the very first element.
pub fn ema_series(values: &[f64], span: usize) -> Vec<f64> {
    let alpha = 2.0 / (span as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut prev: Option<f64> = None;
    for &v in values {
        let next = match prev {
            Some(p) => alpha * v + (1.0 - alpha) * p,
            None => v,
        };
        out.push(next);
        prev = Some(next);
    }
    out
}

/// True range of a bar given the previous close.
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    (high - low)
        .max((high - prev_close).abs())
        .max((low - prev_close).abs())
}

/// Round to two decimal places, the precision of every score and price level
/// the engine reports.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
