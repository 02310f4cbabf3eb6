//! External-collaborator boundaries.
//!
//! Data acquisition, caching, scraping, and retry policy all live behind
//! these traits; the analytical core only ever sees already-resolved series
//! and metric mappings.

pub mod market_data;

pub use market_data::{FundamentalsProvider, PriceHistoryProvider};
