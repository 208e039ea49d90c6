//! Price conversion - exact decimal division into the reference currency
//!
//! A rate expresses how many native-currency units equal one
//! reference-currency unit, so conversion divides: `reference = native / rate`.
//! The quotient is kept at a fixed scale of [`SCALE`] fractional digits with
//! round-half-up on the digit past the scale. This is exact decimal
//! arithmetic; IEEE floats cannot honor the rounding contract and are not
//! used anywhere in the conversion path.

use crate::error::{PriceStatsError, Result};
use crate::types::SCALE;
use rust_decimal::{Decimal, RoundingStrategy};

/// Convert a native-currency price to the reference currency.
///
/// Computes `price / rate` rounded to [`SCALE`] fractional digits,
/// half-up. A zero rate is a [`DivisionByZero`] error; a quotient outside
/// the representable decimal range is an [`Overflow`] error.
///
/// Pure function: identical inputs always produce the identical result.
///
/// [`DivisionByZero`]: crate::error::PriceStatsError::DivisionByZero
/// [`Overflow`]: crate::error::PriceStatsError::Overflow
///
/// # Example
/// ```
/// use pricestats::convert::to_reference;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let price = Decimal::from_str("100.00").unwrap();
/// let rate = Decimal::from_str("1.1").unwrap();
///
/// let converted = to_reference(price, rate).unwrap();
/// assert_eq!(converted, Decimal::from_str("90.9090909091").unwrap());
/// ```
pub fn to_reference(price: Decimal, rate: Decimal) -> Result<Decimal> {
    if rate.is_zero() {
        return Err(PriceStatsError::DivisionByZero);
    }

    let quotient = price
        .checked_div(rate)
        .ok_or(PriceStatsError::Overflow)?;

    Ok(round_to_scale(quotient))
}

/// Round a decimal to the fixed scale with the canonical half-up rule.
///
/// Shared by conversion and averaging so both divisions round identically.
pub(crate) fn round_to_scale(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero)
}
