//! Pay-rule arithmetic for the payroll engine.
//!
//! This module contains the calculation functions for each compensation
//! rule: salaried (housing allowance, amortized bonus and provident fund
//! deduction), contract (flat housing allowance) and daily wage (rate times
//! working days plus attendance bonus), together with the shared cent
//! rounding and the range checks that keep `Decimal` arithmetic from
//! overflowing.

mod bounds;
mod contract;
mod daily_wage;
mod rounding;
mod salaried;

pub use bounds::{MAX_AMOUNT, checked_product, checked_sum, within_max_amount};
pub use contract::{
    CONTRACT_HOUSING_RATE, ContractComponents, calculate_contract_pay, contract_components,
    contract_extension_message,
};
pub use daily_wage::{
    DAILY_WAGE_BONUS_RATE, calculate_daily_wage_pay, daily_wage_basic_pay, daily_wage_bonus,
};
pub use rounding::round_to_cents;
pub use salaried::{
    AnnualIncrement, INCREMENT_HOUSING_SHARE, PROVIDENT_FUND_RATE, SalariedComponents,
    annual_increment, calculate_salaried_pay, salaried_components,
};
