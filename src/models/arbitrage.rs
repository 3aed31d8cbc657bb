//! Arbitrage inputs (one payload per leg) and the evaluated result.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::order::{OrderInfo, OrderPayload};
use super::symbol::SymbolInfo;
use crate::{ArbitrageError, Result};
use crate::math::spread_percent;

/// One leg of the arbitrage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "python", pyo3::pyclass(frozen, get_all, from_py_object))]
pub struct ArbitragePayload {
    pub symbol: SymbolInfo,
    pub order: OrderInfo,
    /// Trading fee in percent.
    #[serde(default)]
    pub fee: Decimal,
    /// Funds available to this leg: quote currency on the ask leg (money to
    /// spend), base currency on the bid leg (inventory to sell). `None` is
    /// unbounded.
    #[serde(default)]
    pub balance: Option<Decimal>,
}

impl ArbitragePayload {
    /// Creates a fee-free leg with no balance cap.
    pub fn new(symbol: SymbolInfo, order: OrderInfo) -> Self {
        Self {
            symbol,
            order,
            fee: Decimal::ZERO,
            balance: None,
        }
    }

    pub fn with_fee(mut self, fee: Decimal) -> Self {
        self.fee = fee;
        self
    }

    pub fn with_balance(mut self, balance: Decimal) -> Self {
        self.balance = Some(balance);
        self
    }
}

/// Outcome of an evaluation: both resolved legs plus the spread (percent)
/// and profit (quote currency) between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "python", pyo3::pyclass(frozen, get_all, from_py_object))]
pub struct ArbitrageResult {
    pub ask_order: OrderPayload,
    pub bid_order: OrderPayload,
    pub spread: Decimal,
    pub profit: Decimal,
}

impl ArbitrageResult {
    /// Assembles a result, deriving spread and profit from the notional
    /// values of the two legs.
    ///
    /// # Errors
    ///
    /// [`ArbitrageError::DivisionByZero`] if the ask notional value is zero,
    /// [`ArbitrageError::Overflow`] if the spread or profit does not fit a
    /// `Decimal`.
    pub fn new(ask_order: OrderPayload, bid_order: OrderPayload) -> Result<Self> {
        let spread = spread_percent(ask_order.notional_value, bid_order.notional_value)?;
        let profit = bid_order
            .notional_value
            .checked_sub(ask_order.notional_value)
            .ok_or(ArbitrageError::Overflow)?;
        Ok(Self {
            ask_order,
            bid_order,
            spread,
            profit,
        })
    }
}
