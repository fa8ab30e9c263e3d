//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the `payroll.yaml` file.

use std::path::PathBuf;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::EmployeeType;

/// Locations of the employee CSV files, one per employee type.
#[derive(Debug, Clone, Deserialize)]
pub struct DataSources {
    /// CSV file with salaried employees.
    pub salaried: PathBuf,
    /// CSV file with contract employees.
    pub contract: PathBuf,
    /// CSV file with daily-wage employees.
    pub daily_wage: PathBuf,
}

impl DataSources {
    /// Returns the configured file for an employee type.
    pub fn path_for(&self, employee_type: EmployeeType) -> &PathBuf {
        match employee_type {
            EmployeeType::Salaried => &self.salaried,
            EmployeeType::Contract => &self.contract,
            EmployeeType::DailyWage => &self.daily_wage,
        }
    }
}

/// Where the payroll CSV is written.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Output path for the payroll CSV.
    pub path: PathBuf,
}

/// A bulk adjustment applied during the batch run.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkAdjustmentConfig {
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

/// Inclusive salary bounds.
#[derive(Debug, Clone, Deserialize)]
pub struct SalaryRange {
    /// Lower bound.
    pub min: Decimal,
    /// Upper bound.
    pub max: Decimal,
}

/// Inclusive hire-date bounds.
#[derive(Debug, Clone, Deserialize)]
pub struct HireDateRange {
    /// First hire date included.
    pub start: NaiveDate,
    /// Last hire date included.
    pub end: NaiveDate,
}

/// Operations performed by the command-line batch run.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchConfig {
    /// Bulk adjustment to apply before reporting.
    #[serde(default)]
    pub bulk_adjustment: Option<BulkAdjustmentConfig>,
    /// Salary band to list.
    #[serde(default)]
    pub salary_range: Option<SalaryRange>,
    /// Employee type to list.
    #[serde(default)]
    pub list_type: Option<EmployeeType>,
    /// Hire-date window to list.
    #[serde(default)]
    pub hire_date_range: Option<HireDateRange>,
    /// Whether the salary ranking is printed highest first.
    #[serde(default)]
    pub sort_descending: bool,
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address to bind, e.g. `127.0.0.1:3000`.
    pub bind: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

/// The complete payroll configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollConfig {
    /// Employee CSV files.
    pub data: DataSources,
    /// Payroll CSV export settings.
    #[serde(default)]
    pub export: Option<ExportConfig>,
    /// Batch run operations.
    #[serde(default)]
    pub batch: BatchConfig,
    /// HTTP server settings; the API is not served when absent.
    #[serde(default)]
    pub server: Option<ServerConfig>,
    /// Default tracing filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}
