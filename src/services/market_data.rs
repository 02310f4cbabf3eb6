//! Provider interfaces for future data source integration.

use std::collections::BTreeMap;

use crate::models::Candle;

/// Source of ordered OHLCV history for a ticker.
///
/// Implementations own caching and fallback; the returned series must have
/// strictly increasing, duplicate-free timestamps.
pub trait PriceHistoryProvider {
    fn get_candles(
        &self,
        ticker: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, Box<dyn std::error::Error>>;
}

/// Source of named fundamental metrics for a ticker.
///
/// Recognized scoring keys are `market_cap`, `pe_ratio`, `roe`,
/// `debt_to_equity`, `promoter_holding`, `sales_growth_3y`,
/// `profit_growth_3y`; extra keys pass through to display untouched.
pub trait FundamentalsProvider {
    fn get_metrics(&self, ticker: &str)
        -> Result<BTreeMap<String, f64>, Box<dyn std::error::Error>>;
}

pub struct PlaceholderPriceHistoryProvider;

impl PriceHistoryProvider for PlaceholderPriceHistoryProvider {
    fn get_candles(
        &self,
        _ticker: &str,
        _limit: usize,
    ) -> Result<Vec<Candle>, Box<dyn std::error::Error>> {
        Ok(Vec::new())
    }
}

pub struct PlaceholderFundamentalsProvider;

impl FundamentalsProvider for PlaceholderFundamentalsProvider {
    fn get_metrics(
        &self,
        _ticker: &str,
    ) -> Result<BTreeMap<String, f64>, Box<dyn std::error::Error>> {
        Ok(BTreeMap::new())
    }
}
