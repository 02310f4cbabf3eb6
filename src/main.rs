use chrono::{Duration, TimeZone, Utc};
use std::collections::BTreeMap;

use equitix::config::AnalysisConfig;
use equitix::logging::init_logging;
use equitix::models::Candle;
use equitix::strategies::StrategyEngine;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_logging();

    let candles = demo_candles(120);
    let metrics = demo_metrics();
    let cfg = AnalysisConfig::default();

    let results = StrategyEngine::analyze("DEMO", &candles, &metrics, &cfg)?;
    if results.is_empty() {
        println!("Not enough history to analyze.");
        return Ok(());
    }

    for (i, result) in results.iter().enumerate() {
        println!(
            "{}. {} — score {:.2}, entry {:.2}, stop {:.2}, target {:.2}",
            i + 1,
            result.strategy,
            result.score,
            result.entry,
            result.stop,
            result.target
        );
        for reason in &result.reasons {
            println!("     - {reason}");
        }
    }

    println!("\nTop pick as JSON:");
    println!("{}", serde_json::to_string_pretty(&results[0])?);
    Ok(())
}

/// Gentle uptrend with a high-volume breakout on the final bar.
fn demo_candles(count: usize) -> Vec<Candle> {
    let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let mut candles = Vec::with_capacity(count);
    for i in 0..count {
        let base = 100.0 + i as f64 * 0.3;
        let last = i == count - 1;
        let close = if last { base + 4.0 } else { base };
        let volume = if last { 2_400_000.0 } else { 1_000_000.0 };
        candles.push(Candle::new(
            base - 0.2,
            close + 0.5,
            base - 0.6,
            close,
            volume,
            start + Duration::days(i as i64),
        ));
    }
    candles
}

fn demo_metrics() -> BTreeMap<String, f64> {
    BTreeMap::from([
        ("market_cap".to_string(), 85_000.0),
        ("pe_ratio".to_string(), 18.5),
        ("roe".to_string(), 21.0),
        ("debt_to_equity".to_string(), 0.4),
        ("sales_growth_3y".to_string(), 12.0),
        ("profit_growth_3y".to_string(), 17.0),
    ])
}
