//! Range limits for pay amounts.
//!
//! `Decimal` arithmetic panics when a result leaves its range, so every
//! product or sum built from caller-supplied amounts goes through the
//! checked helpers here and overflow surfaces as a validation error.

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};

/// Largest value a stored pay component may hold (10^15).
///
/// Three components at this bound still sum, and scale by any `u32` day
/// count, well inside the range of `Decimal`.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Returns `lhs × rhs`, or an out-of-range error naming `field`.
pub fn checked_product(lhs: Decimal, rhs: Decimal, field: &str) -> PayrollResult<Decimal> {
    lhs.checked_mul(rhs)
        .ok_or_else(|| PayrollError::out_of_range(field))
}

/// Returns `lhs + rhs`, or an out-of-range error naming `field`.
pub fn checked_sum(lhs: Decimal, rhs: Decimal, field: &str) -> PayrollResult<Decimal> {
    lhs.checked_add(rhs)
        .ok_or_else(|| PayrollError::out_of_range(field))
}

/// Rejects amounts above [`MAX_AMOUNT`].
pub fn within_max_amount(value: Decimal, field: &str) -> PayrollResult<Decimal> {
    if value > MAX_AMOUNT {
        return Err(PayrollError::out_of_range(field));
    }
    Ok(value)
}
