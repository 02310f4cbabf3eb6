use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Normalized fundamental view of a ticker.
///
/// `metrics` carries the raw provider mapping through to display layers,
/// including keys the scorer does not recognize. `score` is the weighted
/// 0-100 composite; `strengths` and `risks` are fixed descriptive strings in
/// rule-evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundamentalSummary {
    pub ticker: String,
    pub metrics: BTreeMap<String, f64>,
    pub score: f64,
    pub strengths: Vec<String>,
    pub risks: Vec<String>,
}
