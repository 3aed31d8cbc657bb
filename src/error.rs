//! Crate-level error types.
//!
//! [`ArbitrageError`] covers both the validation failures of an evaluation
//! (incompatible lot sizes, quantities or notionals under a leg's minimum)
//! and the surrounding plumbing (configuration, scenario JSON). Every
//! failure is a validation failure of the caller's input: nothing here is
//! transient and nothing is retried.

use rust_decimal::Decimal;

use crate::models::OrderSide;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ArbitrageError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum ArbitrageError {
    /// Reconciliation was requested but neither increment divides the other.
    #[error("quantity increments {ask_increment} (ask) and {bid_increment} (bid) are incompatible")]
    IncompatibleQuantityIncrements {
        ask_increment: Decimal,
        bid_increment: Decimal,
    },

    /// A leg's symbol carries a zero or negative lot size.
    #[error("{side} quantity increment must be positive, got {increment}")]
    NonPositiveQuantityIncrement { side: OrderSide, increment: Decimal },

    /// The resolved quantity of a leg is under its symbol's minimum.
    #[error("{side} quantity {quantity} is less than min quantity {min_quantity}")]
    QuantityBelowMinimum {
        side: OrderSide,
        quantity: Decimal,
        min_quantity: Decimal,
    },

    /// The resolved notional value of a leg is under its symbol's minimum.
    #[error("{side} notional value {notional} is less than min notional {min_notional}")]
    NotionalBelowMinimum {
        side: OrderSide,
        notional: Decimal,
        min_notional: Decimal,
    },

    #[error("division by zero")]
    DivisionByZero,

    /// A result does not fit in a 96-bit decimal.
    #[error("decimal overflow")]
    Overflow,

    /// An environment variable, scenario file or CLI argument is unusable.
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
