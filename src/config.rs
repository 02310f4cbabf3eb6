//! Tunable knobs for every engine layer, collected in one place.
//!
//! Each struct's `Default` carries the production constants; tests and tuning
//! runs override individual fields instead of reaching for hardwired numbers
//! inside the engines.

use serde::{Deserialize, Serialize};

/// Deployment environment, read from `APP_ENV` (defaults to "sandbox").
pub fn get_environment() -> String {
    std::env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

/// Window sizes for the indicator enrichment pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorConfig {
    pub sma_window: usize,
    pub ema_fast_span: usize,
    pub ema_mid_span: usize,
    pub ema_slow_span: usize,
    pub rsi_window: usize,
    pub macd_fast_span: usize,
    pub macd_slow_span: usize,
    pub macd_signal_span: usize,
    pub atr_window: usize,
    pub bollinger_window: usize,
    pub bollinger_std: f64,
    pub stoch_k_window: usize,
    pub stoch_d_window: usize,
    pub range_window: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            sma_window: 20,
            ema_fast_span: 20,
            ema_mid_span: 21,
            ema_slow_span: 50,
            rsi_window: 14,
            macd_fast_span: 12,
            macd_slow_span: 26,
            macd_signal_span: 9,
            atr_window: 14,
            bollinger_window: 20,
            bollinger_std: 2.0,
            stoch_k_window: 14,
            stoch_d_window: 3,
            range_window: 20,
        }
    }
}

/// Pattern-detector parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Trailing window for the breakout reference statistics.
    pub breakout_lookback: usize,
    /// Minimum multiple of the prior mean volume on the breakout bar.
    pub volume_factor: f64,
    /// Trailing window scanned for double tops/bottoms.
    pub double_extreme_lookback: usize,
    /// Two extremes count as "comparable" when they differ by less than this
    /// fraction of the window's mean close.
    pub extreme_tolerance: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            breakout_lookback: 20,
            volume_factor: 1.5,
            double_extreme_lookback: 60,
            extreme_tolerance: 0.01,
        }
    }
}

/// Weight table for the fundamental composite. Weights are not renormalized
/// when a metric is missing; absent metrics simply contribute nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundamentalWeights {
    pub roe: f64,
    pub pe_ratio: f64,
    pub debt_to_equity: f64,
    pub sales_growth_3y: f64,
    pub profit_growth_3y: f64,
}

impl FundamentalWeights {
    /// Metric keys paired with their weights, in scoring order.
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("roe", self.roe),
            ("pe_ratio", self.pe_ratio),
            ("debt_to_equity", self.debt_to_equity),
            ("sales_growth_3y", self.sales_growth_3y),
            ("profit_growth_3y", self.profit_growth_3y),
        ]
    }
}

impl Default for FundamentalWeights {
    fn default() -> Self {
        Self {
            roe: 0.25,
            pe_ratio: 0.20,
            debt_to_equity: 0.15,
            sales_growth_3y: 0.20,
            profit_growth_3y: 0.20,
        }
    }
}

/// How a strategy template picks its entry price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryRule {
    /// Enter at the latest close.
    Close,
    /// Pull back to the fast EMA; 0.98 x close when the column is absent.
    EmaPullback,
}

/// Which indicator-state adjustments a template earns on top of its signal
/// base score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MomentumBias {
    /// No adjustment (intraday and unrecognized templates).
    Neutral,
    /// +10 for mid-range RSI, +10 for MACD above its signal line.
    Swing,
    /// +10 for RSI above 60, +10 for positive MACD above its signal line.
    Breakout,
}

/// Scoring weights and level-derivation rules for one strategy template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyProfile {
    pub weight_technical: f64,
    pub weight_fundamental: f64,
    pub stop_atr: f64,
    pub target_atr: f64,
    pub entry: EntryRule,
    pub momentum: MomentumBias,
    /// Added to the signal base score when the best relevant signal is a
    /// breakout. Non-zero only for the breakout template.
    pub breakout_bonus: f64,
}

/// Per-template profile table with a default arm, so an unrecognized
/// template name scores and derives levels like intraday instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankerConfig {
    pub breakout: StrategyProfile,
    pub swing: StrategyProfile,
    pub fallback: StrategyProfile,
}

impl RankerConfig {
    pub fn profile_for(&self, template: &str) -> &StrategyProfile {
        match template {
            "breakout" => &self.breakout,
            "swing" => &self.swing,
            _ => &self.fallback,
        }
    }
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            breakout: StrategyProfile {
                weight_technical: 0.6,
                weight_fundamental: 0.4,
                stop_atr: 1.5,
                target_atr: 3.0,
                entry: EntryRule::Close,
                momentum: MomentumBias::Breakout,
                breakout_bonus: 10.0,
            },
            swing: StrategyProfile {
                weight_technical: 0.5,
                weight_fundamental: 0.5,
                stop_atr: 2.0,
                target_atr: 4.0,
                entry: EntryRule::EmaPullback,
                momentum: MomentumBias::Swing,
                breakout_bonus: 0.0,
            },
            fallback: StrategyProfile {
                weight_technical: 0.5,
                weight_fundamental: 0.5,
                stop_atr: 1.0,
                target_atr: 2.0,
                entry: EntryRule::Close,
                momentum: MomentumBias::Neutral,
                breakout_bonus: 0.0,
            },
        }
    }
}

/// Umbrella config for the full analysis pipeline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub indicators: IndicatorConfig,
    pub detectors: DetectorConfig,
    pub fundamental_weights: FundamentalWeights,
    pub ranker: RankerConfig,
}
