//! Currency rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary value to cents.
///
/// Every multiplication and accumulation in a payroll report passes
/// through this function, so reports never carry sub-cent precision.
/// Midpoints round away from zero: 2.345 becomes 2.35.
///
/// # Examples
///
/// ```
/// use practice_engine::payroll::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let gross = Decimal::from(3) * Decimal::from_str("15.50").unwrap();
/// assert_eq!(round_currency(gross), Decimal::from_str("46.50").unwrap());
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
