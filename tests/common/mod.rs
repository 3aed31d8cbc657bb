//! Shared test builders.

#![allow(dead_code)]

use rust_decimal::Decimal;

use arbcalc::models::{ArbitragePayload, OrderInfo, OrderPayload, SymbolInfo};

/// A leg with the given symbol and quote and no fee or balance.
pub fn leg(symbol: SymbolInfo, price: Decimal, quantity: Decimal) -> ArbitragePayload {
    ArbitragePayload::new(symbol, OrderInfo::new(price, quantity))
}

/// Expected resolved order.
pub fn order(
    price: Decimal,
    quantity: Decimal,
    notional_value: Decimal,
    taken_fee: Decimal,
    fee_in_base_currency: bool,
) -> OrderPayload {
    OrderPayload {
        price,
        quantity,
        notional_value,
        taken_fee,
        fee_in_base_currency,
    }
}
