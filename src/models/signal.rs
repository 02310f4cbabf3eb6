use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Chart pattern a detector can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    Breakout,
    DoubleTop,
    DoubleBottom,
}

impl SignalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalKind::Breakout => "breakout",
            SignalKind::DoubleTop => "double_top",
            SignalKind::DoubleBottom => "double_bottom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalDirection {
    Bullish,
    Bearish,
}

/// One detected pattern with its numeric evidence.
///
/// `details` uses a BTreeMap so serialized output and reason assembly stay
/// deterministic across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub ticker: String,
    pub indicator: SignalKind,
    pub direction: SignalDirection,
    pub score: f64,
    pub details: BTreeMap<String, f64>,
}
