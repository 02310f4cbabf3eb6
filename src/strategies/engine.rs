//! End-to-end analysis facade wiring the pure layers together.

use std::collections::BTreeMap;

use tracing::info;

use crate::config::AnalysisConfig;
use crate::fundamentals;
use crate::indicators::{self, IndicatorError};
use crate::models::{Candle, StrategyResult};
use crate::signals;
use crate::strategies::ranker;

pub struct StrategyEngine;

impl StrategyEngine {
    /// Run the full pipeline for one ticker: enrich the candle series, detect
    /// patterns, score fundamentals, rank the default templates.
    ///
    /// Insufficient history surfaces as an empty result list, never an error.
    pub fn analyze(
        ticker: &str,
        candles: &[Candle],
        metrics: &BTreeMap<String, f64>,
        cfg: &AnalysisConfig,
    ) -> Result<Vec<StrategyResult>, IndicatorError> {
        let enriched = indicators::compute(candles, &cfg.indicators)?;
        let signals = signals::detect_all(ticker, &enriched, &cfg.detectors);
        let fundamentals = fundamentals::evaluate(ticker, metrics, &cfg.fundamental_weights);
        let results = ranker::rank(ticker, &enriched, &fundamentals, &signals, None, &cfg.ranker);
        info!(
            ticker,
            enriched_rows = enriched.len(),
            signals = signals.len(),
            strategies = results.len(),
            "analysis complete"
        );
        Ok(results)
    }
}
