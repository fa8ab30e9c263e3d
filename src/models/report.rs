//! Payroll report models.
//!
//! This module contains the [`PayrollReport`] produced by the salary system
//! and the per-employee [`PayrollEntry`] lines it is built from.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::EmployeeType;
use crate::calculation::round_to_cents;

/// A single employee line in a payroll report.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{EmployeeType, PayrollEntry};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let entry = PayrollEntry {
///     id: "S001".to_string(),
///     name: "Asha Rao".to_string(),
///     employee_type: EmployeeType::Salaried,
///     salary: Decimal::from_str("54416.67").unwrap(),
///     hire_date: NaiveDate::from_ymd_opt(2023, 3, 1).unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollEntry {
    /// The employee id.
    pub id: String,
    /// The employee name.
    pub name: String,
    /// The compensation type.
    #[serde(rename = "type")]
    pub employee_type: EmployeeType,
    /// The salary computed when the report was generated.
    pub salary: Decimal,
    /// The hire date.
    pub hire_date: NaiveDate,
}

/// Aggregate payroll over every registered employee.
///
/// Built fresh on every request; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Number of employees included.
    pub employee_count: usize,
    /// Number of salaried employees.
    pub salaried_count: usize,
    /// Number of contract employees.
    pub contract_count: usize,
    /// Number of daily-wage employees.
    pub daily_wage_count: usize,
    /// Sum of all salaries, rounded to the cent.
    pub total_salary: Decimal,
    /// Mean salary, rounded to the cent; zero when there are no employees.
    pub average_salary: Decimal,
    /// One entry per employee.
    pub payroll: Vec<PayrollEntry>,
}

impl PayrollReport {
    /// Builds a report from per-employee entries, computing counts and totals.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::PayrollReport;
    /// use rust_decimal::Decimal;
    ///
    /// let report = PayrollReport::from_entries(vec![]);
    /// assert_eq!(report.employee_count, 0);
    /// assert_eq!(report.average_salary, Decimal::ZERO);
    /// ```
    pub fn from_entries(payroll: Vec<PayrollEntry>) -> Self {
        let count_of = |employee_type: EmployeeType| {
            payroll
                .iter()
                .filter(|entry| entry.employee_type == employee_type)
                .count()
        };
        let salaried_count = count_of(EmployeeType::Salaried);
        let contract_count = count_of(EmployeeType::Contract);
        let daily_wage_count = count_of(EmployeeType::DailyWage);

        let total: Decimal = payroll.iter().map(|entry| entry.salary).sum();
        let employee_count = payroll.len();
        let average_salary = if employee_count == 0 {
            Decimal::ZERO
        } else {
            round_to_cents(total / Decimal::from(employee_count))
        };

        Self {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            employee_count,
            salaried_count,
            contract_count,
            daily_wage_count,
            total_salary: round_to_cents(total),
            average_salary,
            payroll,
        }
    }

    /// Returns the number of employees of the given type.
    pub fn count_for(&self, employee_type: EmployeeType) -> usize {
        match employee_type {
            EmployeeType::Salaried => self.salaried_count,
            EmployeeType::Contract => self.contract_count,
            EmployeeType::DailyWage => self.daily_wage_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn entry(id: &str, employee_type: EmployeeType, salary: &str) -> PayrollEntry {
        PayrollEntry {
            id: id.to_string(),
            name: format!("Employee {}", id),
            employee_type,
            salary: dec(salary),
            hire_date: NaiveDate::from_ymd_opt(2023, 3, 1).unwrap(),
        }
    }

    #[test]
    fn test_empty_report_has_zero_average() {
        let report = PayrollReport::from_entries(vec![]);

        assert_eq!(report.employee_count, 0);
        assert_eq!(report.total_salary, dec("0"));
        assert_eq!(report.average_salary, dec("0"));
        assert!(report.payroll.is_empty());
    }

    #[test]
    fn test_totals_and_average() {
        let report = PayrollReport::from_entries(vec![
            entry("S001", EmployeeType::Salaried, "54416.67"),
            entry("C001", EmployeeType::Contract, "3600.00"),
            entry("D001", EmployeeType::DailyWage, "21000.00"),
        ]);

        assert_eq!(report.employee_count, 3);
        assert_eq!(report.total_salary, dec("79016.67"));
        assert_eq!(report.average_salary, dec("26338.89"));
    }

    #[test]
    fn test_counts_per_type() {
        let report = PayrollReport::from_entries(vec![
            entry("S001", EmployeeType::Salaried, "100"),
            entry("S002", EmployeeType::Salaried, "200"),
            entry("D001", EmployeeType::DailyWage, "300"),
        ]);

        assert_eq!(report.count_for(EmployeeType::Salaried), 2);
        assert_eq!(report.count_for(EmployeeType::Contract), 0);
        assert_eq!(report.count_for(EmployeeType::DailyWage), 1);
    }

    #[test]
    fn test_average_rounds_half_away_from_zero() {
        // 0.01 / 2 = 0.005
        let report = PayrollReport::from_entries(vec![
            entry("A", EmployeeType::Contract, "0.01"),
            entry("B", EmployeeType::Contract, "0.00"),
        ]);

        assert_eq!(report.average_salary, dec("0.01"));
    }

    #[test]
    fn test_entry_serializes_type_field() {
        let json = serde_json::to_value(entry("C001", EmployeeType::Contract, "3600.00")).unwrap();

        assert_eq!(json["type"], "contract");
        assert_eq!(json["salary"], "3600.00");
        assert_eq!(json["hire_date"], "2023-03-01");
    }

    #[test]
    fn test_report_serialization_round_trip() {
        let report = PayrollReport::from_entries(vec![entry("S001", EmployeeType::Salaried, "10.50")]);
        let json = serde_json::to_string(&report).unwrap();
        let deserialized: PayrollReport = serde_json::from_str(&json).unwrap();

        assert_eq!(report, deserialized);
    }
}
