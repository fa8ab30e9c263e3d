//! Salaried pay rule.
//!
//! Salaried employees receive basic pay plus a housing allowance and an
//! annual bonus (both set as fractions of basic pay at hire), with the bonus
//! amortized across twelve months and a provident fund deduction taken off.

use rust_decimal::Decimal;

use super::{checked_product, round_to_cents};
use crate::error::PayrollResult;

/// Share of the initial basic pay withheld as the provident fund deduction (12%).
pub const PROVIDENT_FUND_RATE: Decimal = Decimal::from_parts(12, 0, 0, false, 2);

/// Share of an annual increment that is also added to the housing allowance (30%).
pub const INCREMENT_HOUSING_SHARE: Decimal = Decimal::from_parts(3, 0, 0, false, 1);

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// The pay components seeded for a new salaried employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalariedComponents {
    /// Monthly basic pay.
    pub basic_pay: Decimal,
    /// Housing allowance (`basic_pay × hra_percentage`).
    pub housing_allowance: Decimal,
    /// Annual bonus (`basic_pay × bonus_percentage`).
    pub bonus: Decimal,
    /// Provident fund deduction, fixed at hire.
    pub provident_fund_deduction: Decimal,
}

/// Derives the starting pay components for a salaried employee.
///
/// # Arguments
///
/// * `basic_pay` - Monthly basic pay
/// * `hra_percentage` - Housing allowance as a fraction of basic pay (e.g. `0.2`)
/// * `bonus_percentage` - Annual bonus as a fraction of basic pay (e.g. `0.1`)
///
/// # Errors
///
/// Returns a validation error naming the component whose product overflows.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::salaried_components;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let components = salaried_components(
///     Decimal::from(50000),
///     Decimal::from_str("0.2").unwrap(),
///     Decimal::from_str("0.1").unwrap(),
/// )
/// .unwrap();
/// assert_eq!(components.housing_allowance, Decimal::from(10000));
/// assert_eq!(components.bonus, Decimal::from(5000));
/// assert_eq!(components.provident_fund_deduction, Decimal::from(6000));
/// ```
pub fn salaried_components(
    basic_pay: Decimal,
    hra_percentage: Decimal,
    bonus_percentage: Decimal,
) -> PayrollResult<SalariedComponents> {
    Ok(SalariedComponents {
        basic_pay,
        housing_allowance: checked_product(basic_pay, hra_percentage, "housing_allowance")?,
        bonus: checked_product(basic_pay, bonus_percentage, "bonus")?,
        provident_fund_deduction: checked_product(
            basic_pay,
            PROVIDENT_FUND_RATE,
            "provident_fund_deduction",
        )?,
    })
}

/// Calculates the monthly salary for a salaried employee.
///
/// `basic_pay + housing_allowance + bonus / 12 - provident_fund_deduction`,
/// rounded to the cent. The arithmetic saturates at the bounds of `Decimal`,
/// which components within `MAX_AMOUNT` never reach.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_salaried_pay;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let salary = calculate_salaried_pay(
///     Decimal::from(50000),
///     Decimal::from(10000),
///     Decimal::from(5000),
///     Decimal::from(6000),
/// );
/// assert_eq!(salary, Decimal::from_str("54416.67").unwrap());
/// ```
pub fn calculate_salaried_pay(
    basic_pay: Decimal,
    housing_allowance: Decimal,
    bonus: Decimal,
    provident_fund_deduction: Decimal,
) -> Decimal {
    round_to_cents(
        basic_pay
            .saturating_add(housing_allowance)
            .saturating_add(bonus / MONTHS_PER_YEAR)
            .saturating_sub(provident_fund_deduction),
    )
}

/// The deltas produced by an annual increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnualIncrement {
    /// Amount added to basic pay.
    pub basic_pay: Decimal,
    /// Amount added to the housing allowance.
    pub housing_allowance: Decimal,
}

/// Computes the deltas for an annual increment of `increment_percentage` percent.
///
/// The basic pay grows by `basic_pay × increment_percentage / 100`, and the
/// housing allowance grows by 30% of that same amount. The bonus is untouched.
///
/// # Errors
///
/// Returns a `basic_pay` validation error if the increment overflows.
pub fn annual_increment(
    basic_pay: Decimal,
    increment_percentage: Decimal,
) -> PayrollResult<AnnualIncrement> {
    let increment = checked_product(
        basic_pay,
        increment_percentage / Decimal::ONE_HUNDRED,
        "basic_pay",
    )?;
    Ok(AnnualIncrement {
        basic_pay: increment,
        housing_allowance: checked_product(increment, INCREMENT_HOUSING_SHARE, "housing_allowance")?,
    })
}
