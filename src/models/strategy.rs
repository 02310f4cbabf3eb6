use serde::{Deserialize, Serialize};

/// One scored strategy template with its derived price levels.
///
/// `strategy` keeps exactly the template name the caller supplied, even when
/// the ranker scored it through the default profile arm. All numeric fields
/// are rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyResult {
    pub ticker: String,
    pub strategy: String,
    pub score: f64,
    pub entry: f64,
    pub stop: f64,
    pub target: f64,
    pub reasons: Vec<String>,
}
