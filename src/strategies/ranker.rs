//! Multi-factor strategy scoring and ranking.
//!
//! Each template blends a signal-derived technical score, indicator-state
//! adjustments, and the fundamental composite, then derives entry/stop/target
//! from ATR multipliers. The per-template variants live in the
//! [`RankerConfig`] profile table, so an unrecognized template name scores
//! through the default arm instead of failing.

use tracing::debug;

use crate::common::math;
use crate::config::{EntryRule, MomentumBias, RankerConfig, StrategyProfile};
use crate::models::{EnrichedBar, FundamentalSummary, Signal, SignalKind, StrategyResult};

/// Templates ranked when the caller does not name any.
pub const DEFAULT_TEMPLATES: [&str; 3] = ["breakout", "swing", "intraday"];

/// Base technical score when no relevant signal is present.
const NEUTRAL_TECHNICAL_SCORE: f64 = 40.0;

/// Latest indicator state consumed by the scorer.
///
/// Fields are optional so a caller holding only a raw close can still rank;
/// missing values fall back to neutral defaults (RSI 50, MACD 0/0, ATR 2% of
/// close, pullback entry 0.98 x close).
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSnapshot {
    pub close: f64,
    pub ema_fast: Option<f64>,
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub atr: Option<f64>,
}

impl IndicatorSnapshot {
    /// Snapshot with no indicator columns, only a close.
    pub fn from_close(close: f64) -> Self {
        Self {
            close,
            ema_fast: None,
            rsi: None,
            macd: None,
            macd_signal: None,
            atr: None,
        }
    }
}

impl From<&EnrichedBar> for IndicatorSnapshot {
    fn from(bar: &EnrichedBar) -> Self {
        Self {
            close: bar.close,
            ema_fast: Some(bar.ema_fast),
            rsi: Some(bar.rsi),
            macd: Some(bar.macd),
            macd_signal: Some(bar.macd_signal),
            atr: Some(bar.atr),
        }
    }
}

/// Score every template and return them best-first.
///
/// Ties keep the caller's template order (stable sort). An empty enriched
/// series ranks to an empty list; callers branch on emptiness for the
/// insufficient-history case.
pub fn rank(
    ticker: &str,
    bars: &[EnrichedBar],
    fundamentals: &FundamentalSummary,
    signals: &[Signal],
    templates: Option<&[String]>,
    cfg: &RankerConfig,
) -> Vec<StrategyResult> {
    let Some(last) = bars.last() else {
        return Vec::new();
    };
    let snapshot = IndicatorSnapshot::from(last);

    let defaults: Vec<String> = DEFAULT_TEMPLATES.iter().map(|t| t.to_string()).collect();
    let templates = templates.unwrap_or(&defaults);

    let mut results: Vec<StrategyResult> = templates
        .iter()
        .map(|template| score_for_strategy(ticker, template, &snapshot, fundamentals, signals, cfg))
        .collect();
    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    debug!(ticker, templates = results.len(), "strategies ranked");
    results
}

/// Score one template against the latest indicator state.
pub fn score_for_strategy(
    ticker: &str,
    template: &str,
    snapshot: &IndicatorSnapshot,
    fundamentals: &FundamentalSummary,
    signals: &[Signal],
    cfg: &RankerConfig,
) -> StrategyResult {
    let profile = cfg.profile_for(template);
    let close = snapshot.close;
    let atr = snapshot.atr.unwrap_or(close * 0.02);

    let rsi = snapshot.rsi.unwrap_or(50.0);
    let macd = snapshot.macd.unwrap_or(0.0);
    let macd_signal = snapshot.macd_signal.unwrap_or(0.0);

    let mut technical = signal_base_score(profile, signals);
    match profile.momentum {
        MomentumBias::Swing => {
            if rsi > 40.0 && rsi < 60.0 {
                technical += 10.0;
            }
            if macd > macd_signal {
                technical += 10.0;
            }
        }
        MomentumBias::Breakout => {
            if rsi > 60.0 {
                technical += 10.0;
            }
            if macd > macd_signal && macd > 0.0 {
                technical += 10.0;
            }
        }
        MomentumBias::Neutral => {}
    }
    let technical = technical.min(100.0);

    let fundamental = fundamentals.score;
    let combined =
        technical * profile.weight_technical + fundamental * profile.weight_fundamental;

    let entry = match profile.entry {
        EntryRule::Close => close,
        EntryRule::EmaPullback => snapshot.ema_fast.unwrap_or(close * 0.98),
    };
    let stop = entry - profile.stop_atr * atr;
    let target = entry + profile.target_atr * atr;

    let reasons = build_reasons(
        template,
        technical,
        fundamental,
        fundamentals,
        rsi,
        macd,
        macd_signal,
    );

    StrategyResult {
        ticker: ticker.to_string(),
        strategy: template.to_string(),
        score: math::round2(combined),
        entry: math::round2(entry),
        stop: math::round2(stop),
        target: math::round2(target),
        reasons,
    }
}

/// Base score from the best relevant pattern signal, or the neutral 40 when
/// none fired. The breakout template earns its bonus only on a breakout
/// signal.
fn signal_base_score(profile: &StrategyProfile, signals: &[Signal]) -> f64 {
    let relevant: Vec<&Signal> = signals
        .iter()
        .filter(|s| {
            matches!(
                s.indicator,
                SignalKind::Breakout | SignalKind::DoubleTop | SignalKind::DoubleBottom
            )
        })
        .collect();
    let Some(best) = relevant
        .iter()
        .copied()
        .reduce(|a, b| if b.score > a.score { b } else { a })
    else {
        return NEUTRAL_TECHNICAL_SCORE;
    };
    let bonus = if best.indicator == SignalKind::Breakout {
        profile.breakout_bonus
    } else {
        0.0
    };
    (best.score * 10.0 + bonus).min(100.0)
}

/// Deterministic reason assembly: score lines, RSI flag, MACD flag, up to two
/// strengths, up to one risk, trailing template tag.
fn build_reasons(
    template: &str,
    technical: f64,
    fundamental: f64,
    fundamentals: &FundamentalSummary,
    rsi: f64,
    macd: f64,
    macd_signal: f64,
) -> Vec<String> {
    let mut reasons = vec![
        format!("TA score {technical:.1}/100"),
        format!("FA score {fundamental:.1}/100"),
    ];

    if rsi > 70.0 {
        reasons.push("RSI Overbought".to_string());
    } else if rsi < 30.0 {
        reasons.push("RSI Oversold".to_string());
    }
    if macd > macd_signal {
        reasons.push("MACD Bullish Crossover".to_string());
    }

    if !fundamentals.strengths.is_empty() {
        let top: Vec<&str> = fundamentals
            .strengths
            .iter()
            .take(2)
            .map(String::as_str)
            .collect();
        reasons.push(format!("Strengths: {}", top.join(", ")));
    }
    if let Some(risk) = fundamentals.risks.first() {
        reasons.push(format!("Watch: {risk}"));
    }
    reasons.push(format!("Strategy template: {template}"));
    reasons
}
