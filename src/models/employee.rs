//! Employee model and pay-rule variants.
//!
//! This module defines the [`Employee`] record, the [`PayRule`] sum type that
//! carries per-variant state, and the [`EmployeeType`] tag used for filtering.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{
    annual_increment, calculate_contract_pay, calculate_daily_wage_pay, calculate_salaried_pay,
    checked_sum, contract_components, contract_extension_message, daily_wage_basic_pay,
    daily_wage_bonus, salaried_components, within_max_amount,
};
use crate::error::{PayrollError, PayrollResult};

/// The compensation type of an employee.
///
/// # Example
///
/// ```
/// use payroll_engine::models::EmployeeType;
///
/// let employee_type: EmployeeType = "daily_wage".parse().unwrap();
/// assert_eq!(employee_type, EmployeeType::DailyWage);
/// assert_eq!(employee_type.to_string(), "daily_wage");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeType {
    /// Salaried employee with allowance, amortized bonus and provident fund.
    Salaried,
    /// Contractor paid a flat rate plus housing allowance.
    Contract,
    /// Worker paid per working day.
    DailyWage,
}

impl EmployeeType {
    /// Every employee type, in reporting order.
    pub const ALL: [EmployeeType; 3] = [
        EmployeeType::Salaried,
        EmployeeType::Contract,
        EmployeeType::DailyWage,
    ];

    /// Returns the snake_case tag for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeType::Salaried => "salaried",
            EmployeeType::Contract => "contract",
            EmployeeType::DailyWage => "daily_wage",
        }
    }
}

impl fmt::Display for EmployeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmployeeType {
    type Err = PayrollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "salaried" | "full_time" | "fulltime" => Ok(EmployeeType::Salaried),
            "contract" => Ok(EmployeeType::Contract),
            "daily_wage" | "dailywage" | "daily-wage" => Ok(EmployeeType::DailyWage),
            _ => Err(PayrollError::validation(
                "employee_type",
                format!("Unknown employee type: {}", s),
            )),
        }
    }
}

/// Variant-specific state for each compensation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "employee_type", rename_all = "snake_case")]
pub enum PayRule {
    /// Salaried pay rule.
    Salaried {
        /// 12% of the basic pay at hire; never recomputed.
        provident_fund_deduction: Decimal,
    },
    /// Contract pay rule.
    Contract {
        /// Length of the contract in months.
        contract_duration_months: u32,
    },
    /// Daily-wage pay rule.
    DailyWage {
        /// Pay per working day.
        daily_rate: Decimal,
        /// Days worked in the current period.
        working_days: u32,
    },
}

impl PayRule {
    /// Returns the type tag for this rule.
    pub fn employee_type(&self) -> EmployeeType {
        match self {
            PayRule::Salaried { .. } => EmployeeType::Salaried,
            PayRule::Contract { .. } => EmployeeType::Contract,
            PayRule::DailyWage { .. } => EmployeeType::DailyWage,
        }
    }
}

/// An employee subject to payroll.
///
/// The three monetary fields stay between zero and
/// [`MAX_AMOUNT`](crate::calculation::MAX_AMOUNT): every write goes through a
/// guarded setter that rejects values outside that range.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Employee;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut employee = Employee::contract(
///     "C001",
///     "Ravi Kumar",
///     NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
///     Decimal::from(3000),
///     12,
/// )
/// .unwrap();
///
/// assert_eq!(employee.calculate_salary(), Decimal::from_str("3600.00").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    id: String,
    name: String,
    hire_date: NaiveDate,
    basic_pay: Decimal,
    housing_allowance: Decimal,
    bonus: Decimal,
    #[serde(flatten)]
    pay_rule: PayRule,
}

impl Employee {
    fn with_rule(
        id: impl Into<String>,
        name: impl Into<String>,
        hire_date: NaiveDate,
        pay_rule: PayRule,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hire_date,
            basic_pay: Decimal::ZERO,
            housing_allowance: Decimal::ZERO,
            bonus: Decimal::ZERO,
            pay_rule,
        }
    }

    /// Creates a salaried employee.
    ///
    /// # Arguments
    ///
    /// * `basic_pay` - Monthly basic pay
    /// * `hra_percentage` - Housing allowance as a fraction of basic pay
    /// * `bonus_percentage` - Annual bonus as a fraction of basic pay
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::Validation`] if any derived amount is negative
    /// or out of range.
    pub fn salaried(
        id: impl Into<String>,
        name: impl Into<String>,
        hire_date: NaiveDate,
        basic_pay: Decimal,
        hra_percentage: Decimal,
        bonus_percentage: Decimal,
    ) -> PayrollResult<Self> {
        let components = salaried_components(basic_pay, hra_percentage, bonus_percentage)?;
        let mut employee = Self::with_rule(
            id,
            name,
            hire_date,
            PayRule::Salaried {
                provident_fund_deduction: components.provident_fund_deduction,
            },
        );
        employee.set_basic_pay(components.basic_pay)?;
        employee.set_housing_allowance(components.housing_allowance)?;
        employee.set_bonus(components.bonus)?;
        Ok(employee)
    }

    /// Creates a contract employee.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::Validation`] if the contract rate is negative or
    /// out of range.
    pub fn contract(
        id: impl Into<String>,
        name: impl Into<String>,
        hire_date: NaiveDate,
        contract_rate: Decimal,
        contract_duration_months: u32,
    ) -> PayrollResult<Self> {
        let components = contract_components(contract_rate)?;
        let mut employee = Self::with_rule(
            id,
            name,
            hire_date,
            PayRule::Contract {
                contract_duration_months,
            },
        );
        employee.set_basic_pay(components.basic_pay)?;
        employee.set_housing_allowance(components.housing_allowance)?;
        employee.set_bonus(components.bonus)?;
        Ok(employee)
    }

    /// Creates a daily-wage employee.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::Validation`] if the daily rate or the number of
    /// working days is negative, or if the period's pay is out of range.
    pub fn daily_wage(
        id: impl Into<String>,
        name: impl Into<String>,
        hire_date: NaiveDate,
        daily_rate: Decimal,
        working_days: i64,
    ) -> PayrollResult<Self> {
        let daily_rate = non_negative(daily_rate, "daily_rate", "Daily rate cannot be negative")?;
        let working_days = validate_working_days(working_days)?;
        let mut employee = Self::with_rule(
            id,
            name,
            hire_date,
            PayRule::DailyWage {
                daily_rate,
                working_days,
            },
        );
        employee.set_basic_pay(daily_wage_basic_pay(daily_rate, working_days)?)?;
        employee.set_housing_allowance(Decimal::ZERO)?;
        employee.set_bonus(daily_wage_bonus(daily_rate, working_days)?)?;
        Ok(employee)
    }

    /// Returns the employee id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the employee name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the hire date.
    pub fn hire_date(&self) -> NaiveDate {
        self.hire_date
    }

    /// Returns the current basic pay.
    pub fn basic_pay(&self) -> Decimal {
        self.basic_pay
    }

    /// Returns the current housing allowance.
    pub fn housing_allowance(&self) -> Decimal {
        self.housing_allowance
    }

    /// Returns the current bonus.
    pub fn bonus(&self) -> Decimal {
        self.bonus
    }

    /// Returns the variant-specific pay rule state.
    pub fn pay_rule(&self) -> &PayRule {
        &self.pay_rule
    }

    /// Returns the compensation type tag.
    pub fn employee_type(&self) -> EmployeeType {
        self.pay_rule.employee_type()
    }

    /// Sets basic pay, rejecting negative or out-of-range values.
    pub fn set_basic_pay(&mut self, value: Decimal) -> PayrollResult<()> {
        self.basic_pay = non_negative(value, "basic_pay", "Basic pay cannot be negative")?;
        Ok(())
    }

    /// Sets the housing allowance, rejecting negative or out-of-range values.
    pub fn set_housing_allowance(&mut self, value: Decimal) -> PayrollResult<()> {
        self.housing_allowance = non_negative(
            value,
            "housing_allowance",
            "Housing allowance cannot be negative",
        )?;
        Ok(())
    }

    /// Sets the bonus, rejecting negative or out-of-range values.
    pub fn set_bonus(&mut self, value: Decimal) -> PayrollResult<()> {
        self.bonus = non_negative(value, "bonus", "Bonus cannot be negative")?;
        Ok(())
    }

    /// Adds the three deltas to basic pay, housing allowance and bonus.
    ///
    /// The deltas are applied one field at a time in the order basic pay,
    /// housing allowance, bonus. If a field would go negative or out of range
    /// its write is rejected and the error returned; fields already adjusted earlier in the
    /// same call keep their new values and later fields are left untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::Employee;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let mut employee = Employee::contract(
    ///     "C001", "Ravi", NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(), Decimal::from(3000), 12,
    /// ).unwrap();
    ///
    /// // Bonus starts at zero, so the final delta is rejected...
    /// assert!(employee.adjust_salary(Decimal::from(100), Decimal::from(10), Decimal::from(-1)).is_err());
    /// // ...but the basic pay and allowance deltas already landed.
    /// assert_eq!(employee.basic_pay(), Decimal::from(3100));
    /// assert_eq!(employee.housing_allowance(), Decimal::from(610));
    /// ```
    pub fn adjust_salary(
        &mut self,
        basic_change: Decimal,
        hra_change: Decimal,
        bonus_change: Decimal,
    ) -> PayrollResult<()> {
        self.set_basic_pay(checked_sum(self.basic_pay, basic_change, "basic_pay")?)?;
        self.set_housing_allowance(checked_sum(
            self.housing_allowance,
            hra_change,
            "housing_allowance",
        )?)?;
        self.set_bonus(checked_sum(self.bonus, bonus_change, "bonus")?)
    }

    /// Calculates the monthly salary under this employee's pay rule, rounded
    /// to the cent.
    ///
    /// For daily-wage employees this first overwrites basic pay with
    /// `daily_rate × working_days`, so any earlier adjustment to basic pay is
    /// discarded. The stored bonus is used as-is.
    pub fn calculate_salary(&mut self) -> Decimal {
        match self.pay_rule {
            PayRule::Salaried {
                provident_fund_deduction,
            } => calculate_salaried_pay(
                self.basic_pay,
                self.housing_allowance,
                self.bonus,
                provident_fund_deduction,
            ),
            PayRule::Contract { .. } => {
                calculate_contract_pay(self.basic_pay, self.housing_allowance)
            }
            PayRule::DailyWage {
                daily_rate,
                working_days,
            } => {
                // rate × days was range-checked when the day count was stored
                if let Ok(basic_pay) = daily_wage_basic_pay(daily_rate, working_days) {
                    self.basic_pay = basic_pay;
                }
                calculate_daily_wage_pay(self.basic_pay, self.bonus)
            }
        }
    }

    /// Applies an annual increment of `increment_percentage` percent.
    ///
    /// Only valid for salaried employees. Basic pay grows by the increment and
    /// the housing allowance by 30% of it. An increment that takes either
    /// field out of range is a validation error.
    pub fn apply_annual_increment(&mut self, increment_percentage: Decimal) -> PayrollResult<()> {
        if self.employee_type() != EmployeeType::Salaried {
            return Err(self.inapplicable("apply_annual_increment"));
        }
        let increment = annual_increment(self.basic_pay, increment_percentage)?;
        self.adjust_salary(
            increment.basic_pay,
            increment.housing_allowance,
            Decimal::ZERO,
        )
    }

    /// Extends a contract by `additional_months` and returns a confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::Validation`] if the new duration does not fit
    /// in a `u32`; the duration is left unchanged.
    pub fn extend_contract(&mut self, additional_months: u32) -> PayrollResult<String> {
        let PayRule::Contract {
            contract_duration_months,
        } = self.pay_rule
        else {
            return Err(self.inapplicable("extend_contract"));
        };
        let contract_duration_months = contract_duration_months
            .checked_add(additional_months)
            .ok_or_else(|| {
                PayrollError::validation("contract_duration_months", "Contract duration out of range")
            })?;

        self.pay_rule = PayRule::Contract {
            contract_duration_months,
        };
        Ok(contract_extension_message(additional_months))
    }

    /// Replaces the working-day count of a daily-wage employee and recomputes
    /// the bonus. Basic pay is refreshed on the next salary calculation.
    ///
    /// Nothing changes if the day count is negative or the resulting pay is
    /// out of range.
    pub fn update_working_days(&mut self, days: i64) -> PayrollResult<()> {
        let PayRule::DailyWage { daily_rate, .. } = self.pay_rule else {
            return Err(self.inapplicable("update_working_days"));
        };
        let working_days = validate_working_days(days)?;
        within_max_amount(daily_wage_basic_pay(daily_rate, working_days)?, "basic_pay")?;

        self.set_bonus(daily_wage_bonus(daily_rate, working_days)?)?;
        self.pay_rule = PayRule::DailyWage {
            daily_rate,
            working_days,
        };
        Ok(())
    }

    fn inapplicable(&self, operation: &str) -> PayrollError {
        PayrollError::InapplicableOperation {
            operation: operation.to_string(),
            employee_type: self.employee_type().to_string(),
        }
    }
}

fn non_negative(value: Decimal, field: &str, message: &str) -> PayrollResult<Decimal> {
    if value < Decimal::ZERO {
        return Err(PayrollError::validation(field, message));
    }
    within_max_amount(value, field)
}

fn validate_working_days(days: i64) -> PayrollResult<u32> {
    if days < 0 {
        return Err(PayrollError::validation(
            "working_days",
            "Working days cannot be negative",
        ));
    }
    u32::try_from(days)
        .map_err(|_| PayrollError::validation("working_days", "Working days out of range"))
}
