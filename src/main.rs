use std::path::PathBuf;

use arbcalc::ArbitrageError;
use arbcalc::config::fetch_config;
use arbcalc::scenario::Scenario;
use tracing::info;

fn main() -> Result<(), ArbitrageError> {
    // Logs go to stderr; stdout carries the JSON result.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let app_config = fetch_config()?;

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .ok_or_else(|| ArbitrageError::Config("usage: arbcalc <scenario.json>".to_string()))?;

    let scenario = Scenario::load(&path)?;
    let result = scenario.evaluate(app_config.reconcile_quantity_increments)?;
    info!(spread = %result.spread, profit = %result.profit, "Evaluated scenario");

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
