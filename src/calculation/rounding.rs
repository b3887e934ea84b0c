//! Monetary rounding and checked arithmetic helpers.
//!
//! Every calculator stage rounds its outputs with [`round_money`] before
//! returning them, and later stages consume those rounded values.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};

/// Number of decimal places kept on every monetary output.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds a monetary amount to exactly two decimal places.
///
/// Exact midpoints round to the nearest even cent. The result always carries
/// a scale of two, so `0` renders as `0.00`.
///
/// # Examples
///
/// ```
/// use compensation_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("179687.5").unwrap()).to_string(), "179687.50");
/// assert_eq!(round_money(Decimal::from_str("3703.701").unwrap()).to_string(), "3703.70");
/// assert_eq!(round_money(Decimal::from_str("0.125").unwrap()).to_string(), "0.12");
/// assert_eq!(round_money(Decimal::ZERO).to_string(), "0.00");
/// ```
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(MONEY_DECIMAL_PLACES);
    rounded
}

pub(crate) fn checked_mul(lhs: Decimal, rhs: Decimal, operation: &str) -> EngineResult<Decimal> {
    lhs.checked_mul(rhs)
        .ok_or_else(|| EngineError::overflow(operation))
}

pub(crate) fn checked_add(lhs: Decimal, rhs: Decimal, operation: &str) -> EngineResult<Decimal> {
    lhs.checked_add(rhs)
        .ok_or_else(|| EngineError::overflow(operation))
}

pub(crate) fn checked_sub(lhs: Decimal, rhs: Decimal, operation: &str) -> EngineResult<Decimal> {
    lhs.checked_sub(rhs)
        .ok_or_else(|| EngineError::overflow(operation))
}

/// Rejects negative values with `InvalidNumericInput`.
pub(crate) fn ensure_non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::negative(field));
    }
    Ok(())
}
