//! Per-exchange trading constraints of an instrument.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lot size, limits and fee convention of one instrument on one exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "python", pyo3::pyclass(frozen, get_all, from_py_object))]
pub struct SymbolInfo {
    /// Minimum tradable quantity step (lot size). Must be positive.
    pub quantity_increment: Decimal,
    #[serde(default)]
    pub min_quantity: Decimal,
    /// Largest quantity a single order may carry; `None` is unbounded.
    #[serde(default)]
    pub max_quantity: Option<Decimal>,
    /// Smallest accepted order value in quote currency.
    #[serde(default)]
    pub min_notional: Decimal,
    /// The exchange takes its fee in the base asset rather than the quote
    /// asset. Only meaningful on the ask leg.
    #[serde(default)]
    pub fee_in_base_currency: bool,
}

impl SymbolInfo {
    /// Creates symbol constraints with the given lot size and no limits.
    pub fn new(quantity_increment: Decimal) -> Self {
        Self {
            quantity_increment,
            min_quantity: Decimal::ZERO,
            max_quantity: None,
            min_notional: Decimal::ZERO,
            fee_in_base_currency: false,
        }
    }

    pub fn with_min_quantity(mut self, min_quantity: Decimal) -> Self {
        self.min_quantity = min_quantity;
        self
    }

    pub fn with_max_quantity(mut self, max_quantity: Decimal) -> Self {
        self.max_quantity = Some(max_quantity);
        self
    }

    pub fn with_min_notional(mut self, min_notional: Decimal) -> Self {
        self.min_notional = min_notional;
        self
    }

    /// Marks the fee as charged in the base asset.
    pub fn with_fee_in_base_currency(mut self) -> Self {
        self.fee_in_base_currency = true;
        self
    }
}
