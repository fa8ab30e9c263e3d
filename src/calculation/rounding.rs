//! Cent rounding shared by every pay rule.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to the nearest cent, with ties going away from zero:
/// `0.125` becomes `0.13`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_to_cents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rounded = round_to_cents(Decimal::from_str("54416.6666667").unwrap());
/// assert_eq!(rounded, Decimal::from_str("54416.67").unwrap());
/// ```
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
