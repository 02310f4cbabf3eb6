//! Fundamental-metric normalization and composite scoring.

use std::collections::BTreeMap;

use tracing::debug;

use crate::common::math;
use crate::config::FundamentalWeights;
use crate::models::FundamentalSummary;

/// Normalize a raw metrics mapping into a 0-100 score with qualitative flags.
///
/// Metrics absent from the input contribute zero weight (the table is not
/// renormalized) and never produce a strength or risk flag. Keys outside the
/// weight table are ignored by scoring but carried through in `metrics` for
/// display.
pub fn evaluate(
    ticker: &str,
    metrics: &BTreeMap<String, f64>,
    weights: &FundamentalWeights,
) -> FundamentalSummary {
    let score = score_metrics(metrics, weights);
    let (strengths, risks) = qualitative_flags(metrics);
    debug!(ticker, score, "fundamentals evaluated");
    FundamentalSummary {
        ticker: ticker.to_string(),
        metrics: metrics.clone(),
        score: math::round2(score),
        strengths,
        risks,
    }
}

fn score_metrics(metrics: &BTreeMap<String, f64>, weights: &FundamentalWeights) -> f64 {
    let mut total = 0.0;
    for (key, weight) in weights.entries() {
        if let Some(&value) = metrics.get(key) {
            total += normalize(key, value) * weight;
        }
    }
    total.clamp(0.0, 100.0)
}

/// Per-metric normalization to 0-100. Growth-style metrics cap at a 30%
/// ceiling; valuation and leverage invert so lower is better.
fn normalize(key: &str, value: f64) -> f64 {
    match key {
        "roe" | "sales_growth_3y" | "profit_growth_3y" => value.min(30.0) / 30.0 * 100.0,
        "pe_ratio" => 100.0 - value.min(40.0) / 40.0 * 100.0,
        "debt_to_equity" => 100.0 - value.min(2.0) / 2.0 * 100.0,
        _ => 50.0,
    }
}

fn qualitative_flags(metrics: &BTreeMap<String, f64>) -> (Vec<String>, Vec<String>) {
    let mut strengths = Vec::new();
    let mut risks = Vec::new();
    if metrics.get("roe").is_some_and(|&v| v > 18.0) {
        strengths.push("ROE above 18% indicates efficient capital use".to_string());
    }
    if metrics.get("profit_growth_3y").is_some_and(|&v| v > 15.0) {
        strengths.push("Profit growth trend is strong".to_string());
    }
    if metrics.get("pe_ratio").is_some_and(|&v| v < 20.0) {
        strengths.push("Valuation under 20x earnings".to_string());
    }
    if metrics.get("debt_to_equity").is_some_and(|&v| v > 1.0) {
        risks.push("High leverage could pressure cash flows".to_string());
    }
    if metrics.get("sales_growth_3y").is_some_and(|&v| v < 5.0) {
        risks.push("Sales growth has been muted".to_string());
    }
    (strengths, risks)
}
