//! Request types for the payroll API.
//!
//! This module defines the JSON bodies of the mutating endpoints and the
//! query string accepted by `GET /employees`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::EmployeeType;

/// Body of `POST /employees/:id/increment`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncrementRequest {
    /// Increment in percent, e.g. `10` for 10%.
    pub percentage: Decimal,
}

/// Body of `POST /employees/:id/working-days`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingDaysRequest {
    /// New number of working days. Negative values are rejected.
    pub days: i64,
}

/// Body of `POST /employees/:id/contract-extension`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractExtensionRequest {
    /// Months added to the contract.
    pub months: u32,
}

/// Body of `POST /adjustments`.
///
/// Omitted deltas default to zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustmentRequest {
    /// Employees of this type are adjusted.
    pub employee_type: EmployeeType,
    /// Delta added to basic pay.
    #[serde(default)]
    pub basic_pay: Decimal,
    /// Delta added to the housing allowance.
    #[serde(default)]
    pub housing_allowance: Decimal,
    /// Delta added to the bonus.
    #[serde(default)]
    pub bonus: Decimal,
}

/// Ordering for `GET /employees`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Lowest salary first.
    SalaryAsc,
    /// Highest salary first.
    SalaryDesc,
    /// Alphabetical by name.
    Name,
}

/// Query string of `GET /employees`.
///
/// All filters are optional and combine with AND. Without `sort` the listing
/// is in id order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeQuery {
    /// Only employees of this type.
    #[serde(rename = "type")]
    pub employee_type: Option<EmployeeType>,
    /// Lowest salary included.
    pub min_salary: Option<Decimal>,
    /// Highest salary included.
    pub max_salary: Option<Decimal>,
    /// Earliest hire date included.
    pub hired_from: Option<NaiveDate>,
    /// Latest hire date included.
    pub hired_to: Option<NaiveDate>,
    /// Result ordering.
    pub sort: Option<SortOrder>,
}

impl EmployeeQuery {
    /// Returns the inclusive salary band, or `None` when neither bound is set.
    /// A missing bound is open-ended.
    pub fn salary_band(&self) -> Option<(Decimal, Decimal)> {
        if self.min_salary.is_none() && self.max_salary.is_none() {
            return None;
        }
        Some((
            self.min_salary.unwrap_or(Decimal::MIN),
            self.max_salary.unwrap_or(Decimal::MAX),
        ))
    }

    /// Returns the inclusive hire-date window, or `None` when neither bound is
    /// set. A missing bound is open-ended.
    pub fn hire_window(&self) -> Option<(NaiveDate, NaiveDate)> {
        if self.hired_from.is_none() && self.hired_to.is_none() {
            return None;
        }
        Some((
            self.hired_from.unwrap_or(NaiveDate::MIN),
            self.hired_to.unwrap_or(NaiveDate::MAX),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_adjustment_request_defaults_missing_deltas() {
        let request: AdjustmentRequest =
            serde_json::from_str(r#"{"employee_type": "salaried", "bonus": "500"}"#).unwrap();

        assert_eq!(request.employee_type, EmployeeType::Salaried);
        assert_eq!(request.basic_pay, Decimal::ZERO);
        assert_eq!(request.housing_allowance, Decimal::ZERO);
        assert_eq!(request.bonus, dec("500"));
    }

    #[test]
    fn test_unknown_employee_type_is_rejected() {
        let result: Result<AdjustmentRequest, _> =
            serde_json::from_str(r#"{"employee_type": "intern"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_query_has_no_bounds() {
        let query = EmployeeQuery::default();
        assert_eq!(query.salary_band(), None);
        assert_eq!(query.hire_window(), None);
    }

    #[test]
    fn test_single_bound_leaves_other_end_open() {
        let query = EmployeeQuery {
            max_salary: Some(dec("50000")),
            hired_from: NaiveDate::from_ymd_opt(2023, 1, 1),
            ..Default::default()
        };

        assert_eq!(query.salary_band(), Some((Decimal::MIN, dec("50000"))));
        assert_eq!(
            query.hire_window(),
            Some((NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(), NaiveDate::MAX))
        );
    }

    #[test]
    fn test_sort_order_names() {
        let order: SortOrder = serde_json::from_str(r#""salary_desc""#).unwrap();
        assert_eq!(order, SortOrder::SalaryDesc);
    }
}
