//! Analytical core for equity strategy recommendations.
//!
//! Pipeline: raw OHLCV candles -> enriched indicator series -> chart-pattern
//! signals + fundamental score -> ranked strategy results. Every stage is a
//! pure transform over its arguments; data acquisition, caching, and
//! presentation live behind the traits in [`services`].

pub mod common;
pub mod config;
pub mod fundamentals;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;
pub mod strategies;
