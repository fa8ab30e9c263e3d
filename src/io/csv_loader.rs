//! Employee CSV loaders.
//!
//! One loader per employee type. Each takes the raw CSV text, skips the header
//! row and maps every remaining row to an [`Employee`]. Rows that cannot be
//! mapped are logged and returned in [`LoadOutcome::rejected`]; they never abort
//! the load.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, EmployeeType};

const SALARIED_MIN_COLUMNS: usize = 7;
const CONTRACT_MIN_COLUMNS: usize = 6;
const DAILY_WAGE_MIN_COLUMNS: usize = 7;

/// Employees parsed from one CSV source, plus the rows that were skipped.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    /// Successfully mapped employees, in file order.
    pub employees: Vec<Employee>,
    /// One [`PayrollError::InvalidRecord`] per skipped row.
    pub rejected: Vec<PayrollError>,
}

/// Loads salaried employees.
///
/// Columns: `id, name, hire_date, basic_pay, hra_amount, bonus_amount, ...`.
/// The housing allowance and bonus are given as amounts and converted to
/// fractions of basic pay, so a zero basic pay is rejected.
pub fn load_salaried(csv_text: &str) -> LoadOutcome {
    load_rows(csv_text, EmployeeType::Salaried, SALARIED_MIN_COLUMNS, |row| {
        let basic_pay = decimal_field(row, 3, "basic_pay")?;
        if basic_pay.is_zero() {
            return Err(PayrollError::validation(
                "basic_pay",
                "Basic pay must be non-zero to derive allowance percentages",
            ));
        }
        let hra_amount = decimal_field(row, 4, "housing_allowance")?;
        let bonus_amount = decimal_field(row, 5, "bonus")?;
        let hra_percentage = share_of(hra_amount, basic_pay, "housing_allowance")?;
        let bonus_percentage = share_of(bonus_amount, basic_pay, "bonus")?;

        Employee::salaried(
            text_field(row, 0),
            text_field(row, 1),
            date_field(row, 2)?,
            basic_pay,
            hra_percentage,
            bonus_percentage,
        )
    })
}

/// Loads contract employees.
///
/// Columns: `id, name, hire_date, contract_rate, _, duration_months, ...`.
pub fn load_contract(csv_text: &str) -> LoadOutcome {
    load_rows(csv_text, EmployeeType::Contract, CONTRACT_MIN_COLUMNS, |row| {
        Employee::contract(
            text_field(row, 0),
            text_field(row, 1),
            date_field(row, 2)?,
            decimal_field(row, 3, "contract_rate")?,
            parsed_field(row, 5, "contract_duration_months")?,
        )
    })
}

/// Loads daily-wage employees.
///
/// Columns: `id, name, hire_date, daily_rate, working_days, ...`.
pub fn load_daily_wage(csv_text: &str) -> LoadOutcome {
    load_rows(
        csv_text,
        EmployeeType::DailyWage,
        DAILY_WAGE_MIN_COLUMNS,
        |row| {
            Employee::daily_wage(
                text_field(row, 0),
                text_field(row, 1),
                date_field(row, 2)?,
                decimal_field(row, 3, "daily_rate")?,
                parsed_field(row, 4, "working_days")?,
            )
        },
    )
}

/// Loads employees of the given type from CSV text.
pub fn load_employees(csv_text: &str, employee_type: EmployeeType) -> LoadOutcome {
    match employee_type {
        EmployeeType::Salaried => load_salaried(csv_text),
        EmployeeType::Contract => load_contract(csv_text),
        EmployeeType::DailyWage => load_daily_wage(csv_text),
    }
}

/// Reads a CSV file and loads employees of the given type from it.
///
/// # Errors
///
/// Returns [`PayrollError::DataSource`] if the file cannot be read. Bad rows
/// are not errors; see [`LoadOutcome::rejected`].
pub fn load_employees_from_file<P: AsRef<Path>>(
    path: P,
    employee_type: EmployeeType,
) -> PayrollResult<LoadOutcome> {
    let path = path.as_ref();
    let csv_text = fs::read_to_string(path).map_err(|e| PayrollError::DataSource {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let outcome = load_employees(&csv_text, employee_type);
    debug!(
        path = %path.display(),
        employee_type = %employee_type,
        loaded = outcome.employees.len(),
        rejected = outcome.rejected.len(),
        "Loaded employee file"
    );
    Ok(outcome)
}

fn load_rows<F>(
    csv_text: &str,
    employee_type: EmployeeType,
    min_columns: usize,
    map_row: F,
) -> LoadOutcome
where
    F: Fn(&StringRecord) -> PayrollResult<Employee>,
{
    let mut outcome = LoadOutcome::default();
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(csv_text.as_bytes());

    for result in reader.records() {
        let mapped = match result {
            Ok(row) => {
                let line = row.position().map_or(0, |p| p.line());
                if row.len() < min_columns {
                    Err(PayrollError::InvalidRecord {
                        line,
                        message: format!(
                            "expected at least {} columns, found {}",
                            min_columns,
                            row.len()
                        ),
                    })
                } else {
                    map_row(&row).map_err(|e| PayrollError::InvalidRecord {
                        line,
                        message: e.to_string(),
                    })
                }
            }
            Err(e) => Err(PayrollError::InvalidRecord {
                line: e.position().map_or(0, |p| p.line()),
                message: e.to_string(),
            }),
        };

        match mapped {
            Ok(employee) => outcome.employees.push(employee),
            Err(error) => {
                warn!(employee_type = %employee_type, error = %error, "Skipping employee row");
                outcome.rejected.push(error);
            }
        }
    }

    outcome
}

fn text_field(row: &StringRecord, index: usize) -> &str {
    row.get(index).unwrap_or_default()
}

fn date_field(row: &StringRecord, index: usize) -> PayrollResult<NaiveDate> {
    parsed_field(row, index, "hire_date")
}

fn decimal_field(row: &StringRecord, index: usize, field: &str) -> PayrollResult<Decimal> {
    parsed_field(row, index, field)
}

fn share_of(amount: Decimal, basic_pay: Decimal, field: &str) -> PayrollResult<Decimal> {
    amount
        .checked_div(basic_pay)
        .ok_or_else(|| PayrollError::out_of_range(field))
}

fn parsed_field<T>(row: &StringRecord, index: usize, field: &str) -> PayrollResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = text_field(row, index);
    raw.parse::<T>()
        .map_err(|e| PayrollError::validation(field, format!("cannot parse '{}': {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    const SALARIED_CSV: &str = "\
EmployeeID,Name,HireDate,BasicPay,HRA,Bonus,Department
F001, Asha Rao ,2023-03-15,40000,8000,20000,Engineering
";

    #[test]
    fn test_salaried_row_converts_amounts_to_percentages() {
        let outcome = load_salaried(SALARIED_CSV);

        assert!(outcome.rejected.is_empty());
        assert_eq!(outcome.employees.len(), 1);

        let employee = &outcome.employees[0];
        assert_eq!(employee.id(), "F001");
        assert_eq!(employee.name(), "Asha Rao");
        assert_eq!(employee.hire_date(), NaiveDate::from_ymd_opt(2023, 3, 15).unwrap());
        assert_eq!(employee.basic_pay(), dec("40000"));
        assert_eq!(employee.housing_allowance(), dec("8000"));
        assert_eq!(employee.bonus(), dec("20000"));
    }

    #[test]
    fn test_salaried_zero_basic_pay_is_rejected() {
        let csv = "\
EmployeeID,Name,HireDate,BasicPay,HRA,Bonus,Department
F002,Zero Pay,2023-01-01,0,100,100,Ops
";
        let outcome = load_salaried(csv);

        assert!(outcome.employees.is_empty());
        assert_eq!(outcome.rejected.len(), 1);
        assert!(matches!(
            outcome.rejected[0],
            PayrollError::InvalidRecord { line: 2, .. }
        ));
    }

    #[test]
    fn test_short_rows_are_skipped() {
        let csv = "\
EmployeeID,Name,HireDate,BasicPay,HRA,Bonus,Department
F003,Too Short,2023-01-01,40000
F004,Complete,2023-01-01,40000,8000,20000,Ops
";
        let outcome = load_salaried(csv);

        assert_eq!(outcome.employees.len(), 1);
        assert_eq!(outcome.employees[0].id(), "F004");
        match &outcome.rejected[0] {
            PayrollError::InvalidRecord { line, message } => {
                assert_eq!(*line, 2);
                assert_eq!(message, "expected at least 7 columns, found 4");
            }
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_contract_row_uses_rate_and_duration_columns() {
        let csv = "\
EmployeeID,Name,HireDate,ContractRate,Agency,DurationMonths
C001,Ravi Kumar,2024-01-15,3000,Acme,12
";
        let outcome = load_contract(csv);

        assert_eq!(outcome.employees.len(), 1);
        let mut employee = outcome.employees.into_iter().next().unwrap();
        assert_eq!(employee.employee_type(), EmployeeType::Contract);
        assert_eq!(employee.calculate_salary(), dec("3600.00"));
    }

    #[test]
    fn test_daily_wage_row_uses_rate_and_days_columns() {
        let csv = "\
EmployeeID,Name,HireDate,DailyRate,WorkingDays,Shift,Site
D001,Meena,2023-07-01,1000,20,Day,North
";
        let outcome = load_daily_wage(csv);

        assert_eq!(outcome.employees.len(), 1);
        let mut employee = outcome.employees.into_iter().next().unwrap();
        assert_eq!(employee.calculate_salary(), dec("21000.00"));
    }

    #[test]
    fn test_unparsable_values_are_rejected_not_fatal() {
        let csv = "\
EmployeeID,Name,HireDate,DailyRate,WorkingDays,Shift,Site
D002,Bad Date,2023-13-45,1000,20,Day,North
D003,Bad Rate,2023-07-01,lots,20,Day,North
D004,Negative Days,2023-07-01,1000,-2,Day,North
D005,Fine,2023-07-01,800,10,Day,North
";
        let outcome = load_daily_wage(csv);

        assert_eq!(outcome.employees.len(), 1);
        assert_eq!(outcome.employees[0].id(), "D005");
        assert_eq!(outcome.rejected.len(), 3);
    }

    #[test]
    fn test_out_of_range_rate_is_rejected_not_fatal() {
        let csv = "\
EmployeeID,Name,HireDate,DailyRate,WorkingDays,Shift,Site
D009,Huge,2023-07-01,79228162514264337593543950335,2,Day,North
D010,Fine,2023-07-01,1000,20,Day,North
";
        let outcome = load_daily_wage(csv);

        assert_eq!(outcome.employees.len(), 1);
        assert_eq!(outcome.employees[0].id(), "D010");
        match &outcome.rejected[..] {
            [PayrollError::InvalidRecord { line, message }] => {
                assert_eq!(*line, 2);
                assert!(message.contains("amount out of range"));
            }
            other => panic!("Expected one InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_salaried_tiny_basic_pay_with_huge_allowance_is_rejected() {
        let csv = "\
EmployeeID,Name,HireDate,BasicPay,HRA,Bonus,Department
F009,Tiny Basic,2023-01-01,0.0000000000000000000000000001,79228162514264337593543950335,0,Ops
F010,Fine,2023-01-01,40000,8000,20000,Ops
";
        let outcome = load_salaried(csv);

        assert_eq!(outcome.employees.len(), 1);
        assert_eq!(outcome.employees[0].id(), "F010");
        assert_eq!(outcome.rejected.len(), 1);
    }

    #[test]
    fn test_contract_rate_above_max_amount_is_rejected() {
        let csv = "\
EmployeeID,Name,HireDate,ContractRate,Agency,DurationMonths
C009,Huge,2024-01-15,79228162514264337593543950335,Acme,12
";
        let outcome = load_contract(csv);

        assert!(outcome.employees.is_empty());
        assert_eq!(outcome.rejected.len(), 1);
    }

    #[test]
    fn test_empty_input_loads_nothing() {
        let outcome = load_contract("");
        assert!(outcome.employees.is_empty());
        assert!(outcome.rejected.is_empty());
    }

    #[test]
    fn test_load_employees_dispatches_by_type() {
        let outcome = load_employees(SALARIED_CSV, EmployeeType::Salaried);
        assert_eq!(outcome.employees[0].employee_type(), EmployeeType::Salaried);
    }

    #[test]
    fn test_missing_file_is_data_source_error() {
        let result = load_employees_from_file("/nonexistent/employees.csv", EmployeeType::Contract);
        assert!(matches!(result, Err(PayrollError::DataSource { .. })));
    }

    #[test]
    fn test_bundled_data_files_load_cleanly() {
        for employee_type in EmployeeType::ALL {
            let path = match employee_type {
                EmployeeType::Salaried => "data/salaried_employees.csv",
                EmployeeType::Contract => "data/contract_employees.csv",
                EmployeeType::DailyWage => "data/daily_wage_employees.csv",
            };
            let outcome = load_employees_from_file(path, employee_type).unwrap();
            assert!(!outcome.employees.is_empty(), "{} loaded nothing", path);
            assert!(outcome.rejected.is_empty(), "{} had rejects", path);
        }
    }
}
