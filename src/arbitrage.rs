//! Two-legged arbitrage evaluation.
//!
//! Reconciles an ask leg (buy) and a bid leg (sell), each with its own lot
//! size, limits, balance and fee convention, into one executable quantity
//! and fee-correct notional values on both sides.
//!
//! The flow is:
//!
//! 1. pick the quantity increment each leg trades in
//!    ([`resolve_quantity_increments`]),
//! 2. find the largest quantity both legs can carry ([`common_quantity`]),
//! 3. resolve the ask leg, then the bid leg from what the ask leg
//!    delivers ([`resolve_ask_order`], [`resolve_bid_order`]),
//! 4. check each leg's minimums and derive spread and profit.
//!
//! Evaluation is a pure function of its inputs; it can be called from any
//! number of threads at once.

use rust_decimal::Decimal;
use tracing::debug;

use crate::math::{div, fee_amount, minus_fee, quantity_increments_compatible, to_increment};
use crate::models::{ArbitragePayload, ArbitrageResult, OrderPayload, OrderSide, SymbolInfo};
use crate::{ArbitrageError, Result};

/// Evaluates the arbitrage with quantity increments reconciled.
///
/// Shorthand for [`evaluate_arbitrage`]`(ask, bid, true)`.
pub fn arbitrage(ask: &ArbitragePayload, bid: &ArbitragePayload) -> Result<ArbitrageResult> {
    evaluate_arbitrage(ask, bid, true)
}

/// Evaluates buying on the `ask` leg and selling on the `bid` leg.
///
/// With `reconcile_quantity_increments` set, both legs trade in the larger
/// of the two increments, so their quantities match. Without it each leg
/// keeps its own increment and the quantities may differ.
///
/// # Errors
///
/// Returns the first violated constraint, checked in this order:
/// non-positive increment (ask, then bid), incompatible increments,
/// [`ArbitrageError::QuantityBelowMinimum`] (ask, then bid),
/// [`ArbitrageError::NotionalBelowMinimum`] (ask, then bid). Arithmetic
/// failures (zero price against a balance, zero ask notional, a 100 % fee)
/// surface as [`ArbitrageError::DivisionByZero`], values too large for a
/// `Decimal` as [`ArbitrageError::Overflow`].
pub fn evaluate_arbitrage(
    ask: &ArbitragePayload,
    bid: &ArbitragePayload,
    reconcile_quantity_increments: bool,
) -> Result<ArbitrageResult> {
    let (ask_increment, bid_increment) =
        resolve_quantity_increments(&ask.symbol, &bid.symbol, reconcile_quantity_increments)?;

    let quantity = common_quantity(ask, bid)?;
    debug!(%quantity, %ask_increment, %bid_increment, "Resolved common quantity");

    let ask_order = resolve_ask_order(ask, quantity, ask_increment)?;
    // A base-currency fee shrinks what the ask leg delivers, and only that
    // can be sold.
    let bid_quantity = if ask_order.fee_in_base_currency {
        quantity.min(ask_order.received_quantity())
    } else {
        quantity
    };
    let bid_order = resolve_bid_order(bid, bid_quantity, bid_increment)?;

    validate_quantity(OrderSide::Ask, &ask_order, &ask.symbol)?;
    validate_quantity(OrderSide::Bid, &bid_order, &bid.symbol)?;
    validate_notional(OrderSide::Ask, &ask_order, &ask.symbol)?;
    validate_notional(OrderSide::Bid, &bid_order, &bid.symbol)?;

    let result = ArbitrageResult::new(ask_order, bid_order)?;
    debug!(spread = %result.spread, profit = %result.profit, "Evaluated arbitrage");
    Ok(result)
}

/// Returns the `(ask, bid)` increments the legs trade in.
///
/// When reconciling, the increments must divide one another and both legs
/// use the larger one; a multiple of the larger is then a multiple of the
/// smaller too.
///
/// # Errors
///
/// [`ArbitrageError::NonPositiveQuantityIncrement`] for a zero or negative
/// increment, [`ArbitrageError::IncompatibleQuantityIncrements`] when
/// reconciling increments where neither divides the other.
pub fn resolve_quantity_increments(
    ask: &SymbolInfo,
    bid: &SymbolInfo,
    reconcile: bool,
) -> Result<(Decimal, Decimal)> {
    for (side, increment) in [
        (OrderSide::Ask, ask.quantity_increment),
        (OrderSide::Bid, bid.quantity_increment),
    ] {
        if increment <= Decimal::ZERO {
            return Err(ArbitrageError::NonPositiveQuantityIncrement { side, increment });
        }
    }

    if !reconcile {
        return Ok((ask.quantity_increment, bid.quantity_increment));
    }

    if !quantity_increments_compatible(ask.quantity_increment, bid.quantity_increment) {
        debug!(
            ask_increment = %ask.quantity_increment,
            bid_increment = %bid.quantity_increment,
            "Rejected incompatible quantity increments"
        );
        return Err(ArbitrageError::IncompatibleQuantityIncrements {
            ask_increment: ask.quantity_increment,
            bid_increment: bid.quantity_increment,
        });
    }

    let increment = ask.quantity_increment.max(bid.quantity_increment);
    Ok((increment, increment))
}

/// Largest pre-increment quantity both legs can carry.
///
/// The smaller quote, capped by each leg's balance and maximum quantity.
/// The caps apply to both legs. Minimum quantities are not lifted to here:
/// the quotes cap the result anyway, and validation rejects a minimum they
/// cannot reach.
pub fn common_quantity(ask: &ArbitragePayload, bid: &ArbitragePayload) -> Result<Decimal> {
    Ok(ask_quantity_cap(ask)?.min(bid_quantity_cap(bid)))
}

/// The ask leg spends quote currency: its balance buys `balance / price`,
/// less the fee when the fee is paid on top in quote currency.
fn ask_quantity_cap(ask: &ArbitragePayload) -> Result<Decimal> {
    let mut cap = ask.order.quantity;

    if let Some(balance) = ask.balance {
        let spendable = if ask.symbol.fee_in_base_currency {
            balance
        } else {
            minus_fee(balance, ask.fee)?
        };
        cap = cap.min(div(spendable, ask.order.price)?);
    }
    if let Some(max_quantity) = ask.symbol.max_quantity {
        cap = cap.min(max_quantity);
    }

    Ok(cap)
}

/// The bid leg sells base currency out of its balance.
fn bid_quantity_cap(bid: &ArbitragePayload) -> Decimal {
    [bid.balance, bid.symbol.max_quantity]
        .into_iter()
        .flatten()
        .fold(bid.order.quantity, Decimal::min)
}

/// Resolves the buying leg starting from `quantity`.
///
/// The quantity is floored to `increment`. With the fee in quote currency
/// it is paid on top of the order value; with the fee in base currency the
/// order value is unchanged and the fee comes out of the bought quantity
/// (see [`OrderPayload::received_quantity`]).
pub fn resolve_ask_order(
    ask: &ArbitragePayload,
    quantity: Decimal,
    increment: Decimal,
) -> Result<OrderPayload> {
    let price = ask.order.price;
    let quantity = to_increment(quantity, increment)?;
    let value = quantity.checked_mul(price).ok_or(ArbitrageError::Overflow)?;
    let fee_in_base_currency = ask.symbol.fee_in_base_currency;

    let (notional_value, taken_fee) = if fee_in_base_currency {
        (value, fee_amount(quantity, ask.fee)?)
    } else {
        let taken_fee = fee_amount(value, ask.fee)?;
        let notional_value = value
            .checked_add(taken_fee)
            .ok_or(ArbitrageError::Overflow)?;
        (notional_value, taken_fee)
    };

    debug!(%quantity, %notional_value, %taken_fee, fee_in_base_currency, "Resolved ask order");
    Ok(OrderPayload {
        price,
        quantity,
        notional_value,
        taken_fee,
        fee_in_base_currency,
    })
}

/// Resolves the selling leg starting from `quantity`.
///
/// The quantity is floored to `increment` and the fee is always deducted
/// from the quote-currency proceeds; the symbol's base-currency flag does
/// not apply to this leg.
pub fn resolve_bid_order(
    bid: &ArbitragePayload,
    quantity: Decimal,
    increment: Decimal,
) -> Result<OrderPayload> {
    let price = bid.order.price;
    let quantity = to_increment(quantity, increment)?;
    let value = quantity.checked_mul(price).ok_or(ArbitrageError::Overflow)?;
    let taken_fee = fee_amount(value, bid.fee)?;
    let notional_value = value
        .checked_sub(taken_fee)
        .ok_or(ArbitrageError::Overflow)?;

    debug!(%quantity, %notional_value, %taken_fee, "Resolved bid order");
    Ok(OrderPayload {
        price,
        quantity,
        notional_value,
        taken_fee,
        fee_in_base_currency: false,
    })
}

fn validate_quantity(side: OrderSide, order: &OrderPayload, symbol: &SymbolInfo) -> Result<()> {
    if order.quantity < symbol.min_quantity {
        debug!(%side, quantity = %order.quantity, min_quantity = %symbol.min_quantity, "Quantity below minimum");
        return Err(ArbitrageError::QuantityBelowMinimum {
            side,
            quantity: order.quantity,
            min_quantity: symbol.min_quantity,
        });
    }
    Ok(())
}

fn validate_notional(side: OrderSide, order: &OrderPayload, symbol: &SymbolInfo) -> Result<()> {
    if order.notional_value < symbol.min_notional {
        debug!(%side, notional = %order.notional_value, min_notional = %symbol.min_notional, "Notional below minimum");
        return Err(ArbitrageError::NotionalBelowMinimum {
            side,
            notional: order.notional_value,
            min_notional: symbol.min_notional,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderInfo;
    use rust_decimal_macros::dec;

    fn leg(price: Decimal, quantity: Decimal, increment: Decimal) -> ArbitragePayload {
        ArbitragePayload::new(SymbolInfo::new(increment), OrderInfo::new(price, quantity))
    }

    #[test]
    fn reconciled_increments_use_the_larger() {
        let (ask, bid) = resolve_quantity_increments(
            &SymbolInfo::new(dec!(0.01)),
            &SymbolInfo::new(dec!(0.1)),
            true,
        )
        .unwrap();
        assert_eq!(ask, dec!(0.1));
        assert_eq!(bid, dec!(0.1));
    }

    #[test]
    fn unreconciled_increments_are_kept() {
        let (ask, bid) = resolve_quantity_increments(
            &SymbolInfo::new(dec!(0.03)),
            &SymbolInfo::new(dec!(0.1)),
            false,
        )
        .unwrap();
        assert_eq!(ask, dec!(0.03));
        assert_eq!(bid, dec!(0.1));
    }

    #[test]
    fn incompatible_increments_are_rejected() {
        let err = resolve_quantity_increments(
            &SymbolInfo::new(dec!(0.03)),
            &SymbolInfo::new(dec!(0.1)),
            true,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ArbitrageError::IncompatibleQuantityIncrements { ask_increment, bid_increment }
                if ask_increment == dec!(0.03) && bid_increment == dec!(0.1)
        ));
    }

    #[test]
    fn non_positive_increment_is_rejected_even_unreconciled() {
        let err = resolve_quantity_increments(
            &SymbolInfo::new(dec!(0.01)),
            &SymbolInfo::new(dec!(0)),
            false,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ArbitrageError::NonPositiveQuantityIncrement { side: OrderSide::Bid, .. }
        ));
    }

    #[test]
    fn common_quantity_takes_smaller_quote() {
        let ask = leg(dec!(10.5), dec!(100.15), dec!(0.01));
        let bid = leg(dec!(11.5), dec!(50.3), dec!(0.01));
        assert_eq!(common_quantity(&ask, &bid).unwrap(), dec!(50.3));
    }

    #[test]
    fn common_quantity_never_exceeds_quotes_despite_minimums() {
        let mut ask = leg(dec!(10.5), dec!(100.15), dec!(0.01));
        ask.symbol = ask.symbol.with_min_quantity(dec!(100));
        let bid = leg(dec!(11.5), dec!(50.3), dec!(0.01));
        assert_eq!(common_quantity(&ask, &bid).unwrap(), dec!(50.3));
    }

    #[test]
    fn ask_balance_is_quote_currency_net_of_fee() {
        let ask = leg(dec!(10), dec!(100), dec!(0.01))
            .with_fee(dec!(25))
            .with_balance(dec!(500));
        let bid = leg(dec!(11), dec!(100), dec!(0.01));
        // 500 / 1.25 / 10
        assert_eq!(common_quantity(&ask, &bid).unwrap(), dec!(40));
    }

    #[test]
    fn ask_balance_ignores_fee_charged_in_base() {
        let mut ask = leg(dec!(10), dec!(100), dec!(0.01))
            .with_fee(dec!(25))
            .with_balance(dec!(500));
        ask.symbol = ask.symbol.with_fee_in_base_currency();
        let bid = leg(dec!(11), dec!(100), dec!(0.01));
        assert_eq!(common_quantity(&ask, &bid).unwrap(), dec!(50));
    }

    #[test]
    fn bid_balance_is_base_currency() {
        let ask = leg(dec!(10), dec!(100), dec!(0.01));
        let bid = leg(dec!(11), dec!(100), dec!(0.01)).with_balance(dec!(7.5));
        assert_eq!(common_quantity(&ask, &bid).unwrap(), dec!(7.5));
    }

    #[test]
    fn zero_price_with_balance_fails() {
        let ask = leg(dec!(0), dec!(100), dec!(0.01)).with_balance(dec!(10));
        let bid = leg(dec!(11), dec!(100), dec!(0.01));
        assert!(matches!(
            common_quantity(&ask, &bid),
            Err(ArbitrageError::DivisionByZero)
        ));
    }

    #[test]
    fn ask_order_quote_fee_is_added() {
        let ask = leg(dec!(10.5), dec!(100), dec!(0.01)).with_fee(dec!(0.1));
        let order = resolve_ask_order(&ask, dec!(50.305), dec!(0.01)).unwrap();
        assert_eq!(order.quantity, dec!(50.3));
        assert_eq!(order.notional_value, dec!(528.67815));
        assert_eq!(order.taken_fee, dec!(0.52815));
        assert!(!order.fee_in_base_currency);
        assert_eq!(order.received_quantity(), dec!(50.3));
    }

    #[test]
    fn ask_order_base_fee_comes_out_of_quantity() {
        let mut ask = leg(dec!(10.5), dec!(100), dec!(0.01)).with_fee(dec!(0.1));
        ask.symbol = ask.symbol.with_fee_in_base_currency();
        let order = resolve_ask_order(&ask, dec!(50.3), dec!(0.01)).unwrap();
        assert_eq!(order.quantity, dec!(50.3));
        assert_eq!(order.notional_value, dec!(528.15));
        assert_eq!(order.taken_fee, dec!(0.0503));
        assert!(order.fee_in_base_currency);
        assert_eq!(order.received_quantity(), dec!(50.2497));
    }

    #[test]
    fn bid_order_fee_is_deducted() {
        let bid = leg(dec!(11.5), dec!(100), dec!(0.01)).with_fee(dec!(0.1));
        let order = resolve_bid_order(&bid, dec!(50.2497), dec!(0.01)).unwrap();
        assert_eq!(order.quantity, dec!(50.24));
        assert_eq!(order.notional_value, dec!(577.18224));
        assert_eq!(order.taken_fee, dec!(0.57776));
    }

    #[test]
    fn bid_order_ignores_base_currency_flag() {
        let mut bid = leg(dec!(11.5), dec!(100), dec!(0.01)).with_fee(dec!(0.1));
        bid.symbol = bid.symbol.with_fee_in_base_currency();
        let order = resolve_bid_order(&bid, dec!(50.3), dec!(0.01)).unwrap();
        assert!(!order.fee_in_base_currency);
        assert_eq!(order.notional_value, dec!(577.87155));
    }
}
