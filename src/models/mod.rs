//! Value types for a two-legged arbitrage evaluation.
//!
//! Inputs are [`ArbitragePayload`]s (one per leg) built from a
//! [`SymbolInfo`] and an [`OrderInfo`]; the output is an
//! [`ArbitrageResult`] holding one resolved [`OrderPayload`] per leg.
//! Everything here is an immutable value: built per evaluation, consumed,
//! and dropped.

pub mod arbitrage;
pub mod order;
pub mod symbol;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use arbitrage::{ArbitragePayload, ArbitrageResult};
pub use order::{OrderInfo, OrderPayload};
pub use symbol::SymbolInfo;

/// Which leg of the arbitrage a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(
    feature = "python",
    pyo3::pyclass(frozen, eq, eq_int, hash, from_py_object)
)]
pub enum OrderSide {
    /// The buying leg, filled against the ask.
    Ask,
    /// The selling leg, filled against the bid.
    Bid,
}

impl OrderSide {
    /// Returns the lowercase name used in messages and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Ask => "ask",
            OrderSide::Bid => "bid",
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
