//! Quoted orders and their resolved, fee-adjusted form.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A quote as seen in the order book: price and the size available at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "python", pyo3::pyclass(frozen, get_all, from_py_object))]
pub struct OrderInfo {
    pub price: Decimal,
    pub quantity: Decimal,
}

impl OrderInfo {
    pub fn new(price: Decimal, quantity: Decimal) -> Self {
        Self { price, quantity }
    }
}

/// One leg after all constraints and the fee convention are applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "python", pyo3::pyclass(frozen, get_all, from_py_object))]
pub struct OrderPayload {
    pub price: Decimal,
    /// Executable quantity, a multiple of the leg's effective increment.
    pub quantity: Decimal,
    /// Quote-currency value of the order with the fee applied: added on
    /// the ask leg, deducted on the bid leg.
    pub notional_value: Decimal,
    /// Fee withheld by the exchange, in base currency when
    /// `fee_in_base_currency` is set, quote currency otherwise.
    pub taken_fee: Decimal,
    pub fee_in_base_currency: bool,
}

impl OrderPayload {
    /// Base-asset quantity actually held once the order fills.
    pub fn received_quantity(&self) -> Decimal {
        if self.fee_in_base_currency {
            self.quantity - self.taken_fee
        } else {
            self.quantity
        }
    }
}
