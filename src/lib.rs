//! Exact-decimal economics of two-legged cross-exchange arbitrage.
//!
//! Given an ask-side and a bid-side quote, each with its own lot size,
//! limits, balance and fee convention, computes the largest quantity both
//! legs can trade, the fee-adjusted notional value of each leg, and the
//! resulting spread and profit. Pure calculation: no networking, no order
//! placement, no state between calls.
//!
//! ```
//! use arbcalc::arbitrage;
//! use arbcalc::models::{ArbitragePayload, OrderInfo, SymbolInfo};
//! use rust_decimal::Decimal;
//!
//! let dec = |s: &str| s.parse::<Decimal>().unwrap();
//! let ask = ArbitragePayload::new(
//!     SymbolInfo::new(dec("0.01")),
//!     OrderInfo::new(dec("10.5"), dec("100.15")),
//! )
//! .with_fee(dec("0.1"));
//! let bid = ArbitragePayload::new(
//!     SymbolInfo::new(dec("0.01")),
//!     OrderInfo::new(dec("11.5"), dec("50.3")),
//! )
//! .with_fee(dec("0.1"));
//!
//! let result = arbitrage(&ask, &bid).unwrap();
//! assert_eq!(result.profit, dec("49.1934"));
//! ```

pub mod arbitrage;
pub mod config;
pub mod error;
pub mod math;
pub mod models;
#[cfg(feature = "python")]
mod python;
pub mod scenario;

pub use arbitrage::{arbitrage, evaluate_arbitrage};
pub use error::{ArbitrageError, Result};
