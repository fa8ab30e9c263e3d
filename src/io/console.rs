//! Plain-text rendering for the command-line batch run.

use rust_decimal::Decimal;

use crate::models::{Employee, EmployeeType, PayrollReport};

/// Renders the one-line description of an employee with the given salary.
pub fn render_employee_line(employee: &Employee, salary: Decimal) -> String {
    format!(
        "Employee: {}, ID: {}, Type: {}, Total Salary: {:.2}",
        employee.name(),
        employee.id(),
        employee.employee_type(),
        salary
    )
}

/// Renders the report summary block: counts per type, then total and average
/// salary.
pub fn render_summary(report: &PayrollReport) -> String {
    let counts: String = EmployeeType::ALL
        .into_iter()
        .map(|employee_type| {
            format!(
                "{} Employees: {}\n",
                type_heading(employee_type),
                report.count_for(employee_type)
            )
        })
        .collect();

    format!(
        "Payroll Report:\nTotal Employees: {}\n{}Total Salary: ${:.2}\nAverage Salary: ${:.2}\n",
        report.employee_count, counts, report.total_salary, report.average_salary
    )
}

fn type_heading(employee_type: EmployeeType) -> &'static str {
    match employee_type {
        EmployeeType::Salaried => "Salaried",
        EmployeeType::Contract => "Contract",
        EmployeeType::DailyWage => "Daily Wage",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::SalarySystem;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn hired() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_employee_line_format() {
        let employee = Employee::contract("C001", "Ravi Kumar", hired(), dec("3000"), 12).unwrap();

        assert_eq!(
            render_employee_line(&employee, dec("3600")),
            "Employee: Ravi Kumar, ID: C001, Type: contract, Total Salary: 3600.00"
        );
    }

    #[test]
    fn test_summary_lists_counts_and_totals() {
        let mut system = SalarySystem::new();
        system.add_employees(vec![
            Employee::contract("C001", "Ravi", hired(), dec("3000"), 12).unwrap(),
            Employee::daily_wage("D001", "Meena", hired(), dec("1000"), 20).unwrap(),
        ]);

        let summary = render_summary(&system.generate_report());

        assert_eq!(
            summary,
            "Payroll Report:\n\
             Total Employees: 2\n\
             Salaried Employees: 0\n\
             Contract Employees: 1\n\
             Daily Wage Employees: 1\n\
             Total Salary: $24600.00\n\
             Average Salary: $12300.00\n"
        );
    }

    #[test]
    fn test_empty_summary_has_zero_average() {
        let summary = render_summary(&PayrollReport::from_entries(vec![]));
        assert!(summary.contains("Total Employees: 0\n"));
        assert!(summary.contains("Average Salary: $0.00\n"));
    }
}
