use thiserror::Error;

/// Failures local to the indicator layer. Insufficient history is not an
/// error — it surfaces as an empty enriched series.
#[derive(Debug, Error)]
pub enum IndicatorError {
    /// The input series is unusable: a required OHLCV field is non-finite,
    /// a bar violates low <= open/close <= high, volume is negative, or
    /// timestamps are not strictly increasing.
    #[error("malformed series: {0}")]
    MalformedSeries(String),
}
