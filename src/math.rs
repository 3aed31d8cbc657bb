//! Exact decimal primitives for fees, spreads and lot sizes.
//!
//! Every division in the crate goes through [`div`], which rounds
//! half-to-even at 28 significant digits. `Decimal`'s own `/` keeps a
//! 29th digit and rounds it; rounding that value again can be one unit
//! off in the last place.
//!
//! Fees are percentages: `fee = 0.1` means 0.1 %, not 10 %.

use rust_decimal::Decimal;

use crate::{ArbitrageError, Result};

/// Significant digits kept by [`div`].
const PRECISION: u32 = 28;

/// Largest scale a `Decimal` can carry.
const MAX_SCALE: i64 = 28;

/// Smallest mantissa with [`PRECISION`] digits.
const PRECISION_FLOOR: u128 = 10u128.pow(PRECISION - 1);

/// Smallest mantissa with more than [`PRECISION`] digits.
const PRECISION_CEIL: u128 = 10u128.pow(PRECISION);

/// Divides `dividend` by `divisor`, rounding half-to-even at 28
/// significant digits (or at 28 decimal places for tiny quotients).
///
/// Quotients with more than 28 integer digits are rounded too, so the
/// result never carries more than 28 significant digits.
///
/// # Errors
///
/// [`ArbitrageError::DivisionByZero`] for a zero divisor,
/// [`ArbitrageError::Overflow`] if the quotient does not fit a `Decimal`.
pub fn div(dividend: Decimal, divisor: Decimal) -> Result<Decimal> {
    if divisor.is_zero() {
        return Err(ArbitrageError::DivisionByZero);
    }
    if dividend.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let negative = dividend.is_sign_negative() != divisor.is_sign_negative();
    let numerator = dividend.mantissa().unsigned_abs();
    let denominator = divisor.mantissa().unsigned_abs();
    let mut scale = i64::from(dividend.scale()) - i64::from(divisor.scale());

    let mut digits = numerator / denominator;
    let mut remainder = numerator % denominator;

    let round_up = if digits >= PRECISION_CEIL {
        // The integer part alone is too long: drop trailing digits, keeping
        // the last one dropped and whether anything below it was non-zero.
        let mut sticky = remainder != 0;
        let mut last = 0;
        while digits >= PRECISION_CEIL {
            sticky |= last != 0;
            last = digits % 10;
            digits /= 10;
            scale -= 1;
        }
        last > 5 || (last == 5 && (sticky || digits % 2 == 1))
    } else {
        // Long division, one decimal digit per step. Both mantissas are
        // below 2^96, so `remainder * 10` cannot overflow.
        while remainder != 0 && digits < PRECISION_FLOOR && scale < MAX_SCALE {
            remainder *= 10;
            digits = digits * 10 + remainder / denominator;
            remainder %= denominator;
            scale += 1;
        }
        let twice = remainder * 2;
        twice > denominator || (twice == denominator && digits % 2 == 1)
    };

    if round_up {
        digits += 1;
        if digits == PRECISION_CEIL {
            digits /= 10;
            scale -= 1;
        }
    }

    let mantissa = i128::try_from(digits).map_err(|_| ArbitrageError::Overflow)?;
    let magnitude = if scale >= 0 {
        // `scale` is at most MAX_SCALE here.
        Decimal::try_from_i128_with_scale(mantissa, scale as u32)
            .map_err(|_| ArbitrageError::Overflow)?
    } else {
        let mut value = Decimal::try_from_i128_with_scale(mantissa, 0)
            .map_err(|_| ArbitrageError::Overflow)?;
        for _ in scale..0 {
            value = value
                .checked_mul(Decimal::TEN)
                .ok_or(ArbitrageError::Overflow)?;
        }
        value
    };

    Ok(if negative { -magnitude } else { magnitude })
}

/// Percentage difference of `bid_value` over `ask_value`:
/// `(bid_value / ask_value - 1) * 100`.
///
/// Positive when the bid side is worth more (the profitable direction).
///
/// # Errors
///
/// [`ArbitrageError::DivisionByZero`] if `ask_value` is zero,
/// [`ArbitrageError::Overflow`] if the percentage does not fit a `Decimal`.
pub fn spread_percent(ask_value: Decimal, bid_value: Decimal) -> Result<Decimal> {
    div(bid_value, ask_value)?
        .checked_sub(Decimal::ONE)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or(ArbitrageError::Overflow)
}

/// Returns `true` if one increment evenly divides the other.
///
/// Symmetric. A zero increment is never compatible.
pub fn quantity_increments_compatible(a: Decimal, b: Decimal) -> bool {
    if a.is_zero() || b.is_zero() {
        return false;
    }
    let divides = |n: Decimal, d: Decimal| n.checked_rem(d).is_some_and(|r| r.is_zero());
    divides(a, b) || divides(b, a)
}

/// Rounds `n` down to a multiple of `increment`.
///
/// Computed as `n - n % increment`, which is exact for any scale. Negative
/// inputs round toward zero.
///
/// # Errors
///
/// [`ArbitrageError::DivisionByZero`] if `increment` is zero.
pub fn to_increment(n: Decimal, increment: Decimal) -> Result<Decimal> {
    let remainder = n
        .checked_rem(increment)
        .ok_or(ArbitrageError::DivisionByZero)?;
    Ok((n - remainder).normalize())
}

/// Returns the amount that is left with `n` once `fee` percent is removed
/// from it: `n / (1 - fee / 100)`.
///
/// # Errors
///
/// [`ArbitrageError::DivisionByZero`] for a 100 % fee.
pub fn plus_fee(n: Decimal, fee: Decimal) -> Result<Decimal> {
    div(n, Decimal::ONE - div(fee, Decimal::ONE_HUNDRED)?)
}

/// Returns the amount which, with `fee` percent added on top, comes to
/// `n`: `n / (1 + fee / 100)`.
///
/// # Errors
///
/// [`ArbitrageError::DivisionByZero`] for a fee of -100 %.
pub fn minus_fee(n: Decimal, fee: Decimal) -> Result<Decimal> {
    div(n, Decimal::ONE + div(fee, Decimal::ONE_HUNDRED)?)
}

/// The fee charged on `n`: `n * fee / 100`.
pub fn fee_amount(n: Decimal, fee: Decimal) -> Result<Decimal> {
    let gross = n.checked_mul(fee).ok_or(ArbitrageError::Overflow)?;
    div(gross, Decimal::ONE_HUNDRED)
}
