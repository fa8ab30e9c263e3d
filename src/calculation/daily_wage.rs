//! Daily-wage pay rule.
//!
//! Daily-wage workers earn their daily rate for each working day plus a 5%
//! attendance bonus on the same base. They receive no housing allowance.

use rust_decimal::Decimal;

use super::{checked_product, round_to_cents};
use crate::error::PayrollResult;

/// Bonus paid on daily-wage earnings (5%).
pub const DAILY_WAGE_BONUS_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Returns `daily_rate × working_days`.
///
/// # Errors
///
/// Returns a `basic_pay` validation error if the product overflows.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::daily_wage_basic_pay;
/// use rust_decimal::Decimal;
///
/// assert_eq!(daily_wage_basic_pay(Decimal::from(1000), 20), Ok(Decimal::from(20000)));
/// assert!(daily_wage_basic_pay(Decimal::MAX, 2).is_err());
/// ```
pub fn daily_wage_basic_pay(daily_rate: Decimal, working_days: u32) -> PayrollResult<Decimal> {
    checked_product(daily_rate, Decimal::from(working_days), "basic_pay")
}

/// Returns `daily_rate × working_days × 0.05`.
pub fn daily_wage_bonus(daily_rate: Decimal, working_days: u32) -> PayrollResult<Decimal> {
    checked_product(
        daily_wage_basic_pay(daily_rate, working_days)?,
        DAILY_WAGE_BONUS_RATE,
        "bonus",
    )
}

/// Calculates the salary for a daily-wage employee: basic pay plus bonus,
/// rounded to the cent.
///
/// The caller is responsible for recomputing `basic_pay` from the current
/// rate and day count before calling this. The sum saturates at the bounds
/// of `Decimal`, which amounts within `MAX_AMOUNT` never reach.
pub fn calculate_daily_wage_pay(basic_pay: Decimal, bonus: Decimal) -> Decimal {
    round_to_cents(basic_pay.saturating_add(bonus))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PayrollError;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_basic_pay_is_rate_times_days() {
        assert_eq!(daily_wage_basic_pay(dec("1000"), 20), Ok(dec("20000")));
    }

    #[test]
    fn test_bonus_is_five_percent() {
        assert_eq!(daily_wage_bonus(dec("1000"), 20), Ok(dec("1000")));
    }

    #[test]
    fn test_pay_for_twenty_days() {
        let salary = calculate_daily_wage_pay(
            daily_wage_basic_pay(dec("1000"), 20).unwrap(),
            daily_wage_bonus(dec("1000"), 20).unwrap(),
        );
        assert_eq!(salary, dec("21000.00"));
    }

    #[test]
    fn test_zero_days_pays_nothing() {
        let salary = calculate_daily_wage_pay(
            daily_wage_basic_pay(dec("850.50"), 0).unwrap(),
            daily_wage_bonus(dec("850.50"), 0).unwrap(),
        );
        assert_eq!(salary, dec("0"));
    }

    #[test]
    fn test_fractional_rate_rounds_half_up() {
        // 12.35 * 1 * 1.05 = 12.9675
        let salary = calculate_daily_wage_pay(
            daily_wage_basic_pay(dec("12.35"), 1).unwrap(),
            daily_wage_bonus(dec("12.35"), 1).unwrap(),
        );
        assert_eq!(salary, dec("12.97"));
    }

    #[test]
    fn test_huge_rate_overflow_is_a_validation_error() {
        let rate = dec("79228162514264337593543950335");

        assert_eq!(
            daily_wage_basic_pay(rate, 2),
            Err(PayrollError::out_of_range("basic_pay"))
        );
        assert!(daily_wage_bonus(rate, 2).is_err());
        // zero days never overflows
        assert_eq!(daily_wage_basic_pay(rate, 0), Ok(Decimal::ZERO));
    }

    #[test]
    fn test_pay_sum_saturates_instead_of_panicking() {
        assert_eq!(
            calculate_daily_wage_pay(Decimal::MAX, Decimal::MAX),
            Decimal::MAX
        );
    }

    proptest! {
        #[test]
        fn prop_daily_wage_pay_is_105_percent(rate_cents in 0i64..10_000_000, days in 0u32..366) {
            let rate = Decimal::new(rate_cents, 2);
            let basic = daily_wage_basic_pay(rate, days).unwrap();
            let bonus = daily_wage_bonus(rate, days).unwrap();

            prop_assert_eq!(
                calculate_daily_wage_pay(basic, bonus),
                round_to_cents(rate * Decimal::from(days) * dec("1.05"))
            );
        }
    }
}
