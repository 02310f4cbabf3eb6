//! Unit tests for the fundamental scorer

use std::collections::BTreeMap;

use equitix::config::FundamentalWeights;
use equitix::fundamentals::evaluate;

fn metrics(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

#[test]
fn test_balanced_profile_scores_and_flags() {
    let input = metrics(&[
        ("roe", 20.0),
        ("pe_ratio", 15.0),
        ("debt_to_equity", 0.5),
        ("sales_growth_3y", 10.0),
        ("profit_growth_3y", 10.0),
    ]);
    let summary = evaluate("TEST", &input, &FundamentalWeights::default());

    // 16.6667 + 12.5 + 11.25 + 6.6667 + 6.6667
    assert!((summary.score - 53.75).abs() < 1e-9);
    assert_eq!(
        summary.strengths,
        vec![
            "ROE above 18% indicates efficient capital use".to_string(),
            "Valuation under 20x earnings".to_string(),
        ]
    );
    assert!(summary.risks.is_empty());
}

#[test]
fn test_missing_metrics_are_not_renormalized() {
    // Only ROE present, at its cap: contribution is exactly its 25% weight.
    let summary = evaluate(
        "TEST",
        &metrics(&[("roe", 30.0)]),
        &FundamentalWeights::default(),
    );
    assert!((summary.score - 25.0).abs() < 1e-9);
}

#[test]
fn test_empty_metrics_score_zero_with_no_flags() {
    let summary = evaluate("TEST", &BTreeMap::new(), &FundamentalWeights::default());
    assert_eq!(summary.score, 0.0);
    assert!(summary.strengths.is_empty());
    // A missing sales_growth_3y must not raise the muted-sales risk.
    assert!(summary.risks.is_empty());
}

#[test]
fn test_normalization_ceilings() {
    // Values past their caps normalize to the extreme, not beyond.
    let capped = evaluate(
        "TEST",
        &metrics(&[("roe", 50.0), ("pe_ratio", 80.0), ("debt_to_equity", 5.0)]),
        &FundamentalWeights::default(),
    );
    // roe: 100 * 0.25; pe and d/e normalize to 0
    assert!((capped.score - 25.0).abs() < 1e-9);
    assert_eq!(
        capped.risks,
        vec!["High leverage could pressure cash flows".to_string()]
    );
}

#[test]
fn test_perfect_metrics_stay_within_bounds() {
    let summary = evaluate(
        "TEST",
        &metrics(&[
            ("roe", 30.0),
            ("pe_ratio", 0.0),
            ("debt_to_equity", 0.0),
            ("sales_growth_3y", 30.0),
            ("profit_growth_3y", 30.0),
        ]),
        &FundamentalWeights::default(),
    );
    assert_eq!(summary.score, 100.0);
}

#[test]
fn test_risk_flags_in_rule_order() {
    let summary = evaluate(
        "TEST",
        &metrics(&[("debt_to_equity", 1.5), ("sales_growth_3y", 2.0)]),
        &FundamentalWeights::default(),
    );
    assert_eq!(
        summary.risks,
        vec![
            "High leverage could pressure cash flows".to_string(),
            "Sales growth has been muted".to_string(),
        ]
    );
}

#[test]
fn test_unrecognized_keys_pass_through_unscored() {
    let input = metrics(&[("roe", 30.0), ("market_cap", 50_000.0), ("mystery", 7.0)]);
    let summary = evaluate("TEST", &input, &FundamentalWeights::default());
    assert!((summary.score - 25.0).abs() < 1e-9);
    assert_eq!(summary.metrics["market_cap"], 50_000.0);
    assert_eq!(summary.metrics["mystery"], 7.0);
}
