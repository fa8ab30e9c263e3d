//! Contract pay rule.
//!
//! Contractors are paid their contract rate plus a flat 20% housing
//! allowance. They receive no bonus.

use rust_decimal::Decimal;

use super::{checked_product, round_to_cents};
use crate::error::PayrollResult;

/// Housing allowance paid to contractors as a share of the contract rate (20%).
pub const CONTRACT_HOUSING_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 2);

/// The pay components seeded for a new contract employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractComponents {
    /// Basic pay, equal to the contract rate.
    pub basic_pay: Decimal,
    /// Housing allowance (`rate × 0.20`).
    pub housing_allowance: Decimal,
    /// Always zero.
    pub bonus: Decimal,
}

/// Derives the starting pay components from a contract rate.
///
/// # Errors
///
/// Returns a `housing_allowance` validation error if the allowance overflows.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::contract_components;
/// use rust_decimal::Decimal;
///
/// let components = contract_components(Decimal::from(3000)).unwrap();
/// assert_eq!(components.housing_allowance, Decimal::from(600));
/// assert!(components.bonus.is_zero());
/// ```
pub fn contract_components(contract_rate: Decimal) -> PayrollResult<ContractComponents> {
    Ok(ContractComponents {
        basic_pay: contract_rate,
        housing_allowance: checked_product(
            contract_rate,
            CONTRACT_HOUSING_RATE,
            "housing_allowance",
        )?,
        bonus: Decimal::ZERO,
    })
}

/// Calculates the monthly salary for a contract employee: basic pay plus
/// housing allowance, rounded to the cent. Saturates at the bounds of
/// `Decimal`.
pub fn calculate_contract_pay(basic_pay: Decimal, housing_allowance: Decimal) -> Decimal {
    round_to_cents(basic_pay.saturating_add(housing_allowance))
}

/// Confirmation returned after a contract is extended.
pub fn contract_extension_message(additional_months: u32) -> String {
    format!("Contract extended by {} months", additional_months)
}
