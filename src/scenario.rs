//! Arbitrage scenarios stored as JSON files.
//!
//! A scenario is the pair of legs an evaluation needs, optionally with its
//! own reconciliation setting:
//!
//! ```json
//! {
//!     "ask": {
//!         "symbol": {"quantity_increment": "0.01"},
//!         "order": {"price": "10.5", "quantity": "100.15"},
//!         "fee": "0.1"
//!     },
//!     "bid": {
//!         "symbol": {"quantity_increment": "0.01"},
//!         "order": {"price": "11.5", "quantity": "50.3"},
//!         "fee": "0.1"
//!     }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::arbitrage::evaluate_arbitrage;
use crate::models::{ArbitragePayload, ArbitrageResult};

/// Both legs of an evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub ask: ArbitragePayload,
    pub bid: ArbitragePayload,
    /// Overrides the configured default when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reconcile_quantity_increments: Option<bool>,
}

impl Scenario {
    /// Loads a scenario from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            crate::ArbitrageError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        let scenario: Self = serde_json::from_str(&contents)?;
        debug!(path = %path.display(), "Loaded scenario");
        Ok(scenario)
    }

    /// Evaluates the scenario, reconciling increments per the scenario's
    /// own flag or `default_reconcile` when it has none.
    pub fn evaluate(&self, default_reconcile: bool) -> crate::Result<ArbitrageResult> {
        let reconcile = self
            .reconcile_quantity_increments
            .unwrap_or(default_reconcile);
        evaluate_arbitrage(&self.ask, &self.bid, reconcile)
    }
}
