//! The employee registry and query engine.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, EmployeeType, PayrollEntry, PayrollReport};

use super::outcome::{AdjustmentFailure, BulkAdjustment, IncrementOutcome, RemovalOutcome};

/// Owns the employee collection and answers payroll queries over it.
///
/// Employees are keyed by id; adding an employee whose id is already present
/// replaces the earlier record. Iteration follows id order, which also breaks
/// ties in the stable sorts.
///
/// The registry has no internal locking. Share it across threads only behind
/// a single external lock.
///
/// Most queries take `&mut self` because computing a daily-wage salary
/// refreshes that employee's basic pay.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Employee;
/// use payroll_engine::system::SalarySystem;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let hired = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let mut system = SalarySystem::new();
/// system.add_employees(vec![
///     Employee::contract("C001", "Ravi", hired, Decimal::from(3000), 12).unwrap(),
///     Employee::daily_wage("D001", "Meena", hired, Decimal::from(1000), 20).unwrap(),
/// ]);
///
/// let report = system.generate_report();
/// assert_eq!(report.employee_count, 2);
/// assert_eq!(report.total_salary, Decimal::from_str("24600.00").unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SalarySystem {
    employees: BTreeMap<String, Employee>,
}

impl SalarySystem {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts employees, replacing any existing record with the same id.
    pub fn add_employees<I>(&mut self, employees: I)
    where
        I: IntoIterator<Item = Employee>,
    {
        for employee in employees {
            let id = employee.id().to_string();
            if let Some(previous) = self.employees.insert(id, employee) {
                debug!(employee_id = %previous.id(), "Replaced existing employee record");
            }
        }
    }

    /// Removes an employee by id.
    pub fn remove_employee(&mut self, id: &str) -> RemovalOutcome {
        match self.employees.remove(id) {
            Some(employee) => {
                info!(employee_id = %id, "Employee removed");
                RemovalOutcome::Removed {
                    name: employee.name().to_string(),
                }
            }
            None => RemovalOutcome::NotFound { id: id.to_string() },
        }
    }

    /// Returns the current salary of an employee, or `None` for an unknown id.
    pub fn employee_salary(&mut self, id: &str) -> Option<Decimal> {
        self.employees.get_mut(id).map(Employee::calculate_salary)
    }

    /// Applies an annual increment to a salaried employee.
    ///
    /// Unknown ids and non-salaried employees yield
    /// [`IncrementOutcome::NotApplicable`]. A negative percentage large enough
    /// to push a field below zero is rejected with a validation error.
    pub fn apply_increment(
        &mut self,
        id: &str,
        increment_percentage: Decimal,
    ) -> PayrollResult<IncrementOutcome> {
        let Some(employee) = self
            .employees
            .get_mut(id)
            .filter(|employee| employee.employee_type() == EmployeeType::Salaried)
        else {
            return Ok(IncrementOutcome::NotApplicable);
        };

        employee.apply_annual_increment(increment_percentage)?;
        info!(
            employee_id = %id,
            increment_percentage = %increment_percentage,
            "Annual increment applied"
        );
        Ok(IncrementOutcome::Applied {
            name: employee.name().to_string(),
        })
    }

    /// Adds the three deltas to every employee of `employee_type`.
    ///
    /// Each employee is adjusted independently. A rejected delta is recorded in
    /// the returned summary and the remaining employees are still processed.
    pub fn bulk_adjust(
        &mut self,
        employee_type: EmployeeType,
        basic_change: Decimal,
        hra_change: Decimal,
        bonus_change: Decimal,
    ) -> BulkAdjustment {
        let mut summary = BulkAdjustment::default();

        for employee in self
            .employees
            .values_mut()
            .filter(|employee| employee.employee_type() == employee_type)
        {
            summary.matched += 1;
            match employee.adjust_salary(basic_change, hra_change, bonus_change) {
                Ok(()) => summary.adjusted += 1,
                Err(error) => {
                    warn!(
                        employee_id = %employee.id(),
                        error = %error,
                        "Salary adjustment rejected"
                    );
                    summary
                        .failures
                        .push(AdjustmentFailure::new(employee.id(), error));
                }
            }
        }

        info!(
            employee_type = %employee_type,
            matched = summary.matched,
            adjusted = summary.adjusted,
            rejected = summary.failures.len(),
            "Bulk salary adjustment completed"
        );
        summary
    }

    /// Returns employees whose freshly computed salary lies in `min..=max`.
    pub fn filter_by_salary(&mut self, min: Decimal, max: Decimal) -> Vec<&Employee> {
        self.employees
            .values_mut()
            .filter_map(|employee| {
                let salary = employee.calculate_salary();
                let employee: &Employee = employee;
                (salary >= min && salary <= max).then_some(employee)
            })
            .collect()
    }

    /// Returns employees of the given type.
    pub fn filter_by_type(&self, employee_type: EmployeeType) -> Vec<&Employee> {
        self.employees
            .values()
            .filter(|employee| employee.employee_type() == employee_type)
            .collect()
    }

    /// Returns employees hired between `start` and `end`, both inclusive.
    pub fn filter_by_hire_date(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Employee> {
        self.employees
            .values()
            .filter(|employee| employee.hire_date() >= start && employee.hire_date() <= end)
            .collect()
    }

    /// Returns every employee ordered by computed salary.
    ///
    /// The sort is stable, so equal salaries keep id order.
    pub fn sort_by_salary(&mut self, ascending: bool) -> Vec<&Employee> {
        let mut ranked = self.salaries();
        ranked.sort_by(|(a, _), (b, _)| if ascending { a.cmp(b) } else { b.cmp(a) });
        ranked.into_iter().map(|(_, employee)| employee).collect()
    }

    /// Returns every employee ordered by name, ascending.
    pub fn sort_by_name(&self) -> Vec<&Employee> {
        let mut sorted: Vec<&Employee> = self.employees.values().collect();
        sorted.sort_by(|a, b| a.name().cmp(b.name()));
        sorted
    }

    /// Builds a payroll report, computing every salary afresh.
    pub fn generate_report(&mut self) -> PayrollReport {
        let entries = self
            .salaries()
            .into_iter()
            .map(|(salary, employee)| PayrollEntry {
                id: employee.id().to_string(),
                name: employee.name().to_string(),
                employee_type: employee.employee_type(),
                salary,
                hire_date: employee.hire_date(),
            })
            .collect();

        let report = PayrollReport::from_entries(entries);
        debug!(
            report_id = %report.report_id,
            employee_count = report.employee_count,
            total_salary = %report.total_salary,
            "Payroll report generated"
        );
        report
    }

    /// Extends the contract of a contract employee.
    pub fn extend_contract(&mut self, id: &str, additional_months: u32) -> PayrollResult<String> {
        self.require_mut(id)?.extend_contract(additional_months)
    }

    /// Updates the working days of a daily-wage employee.
    pub fn update_working_days(&mut self, id: &str, days: i64) -> PayrollResult<()> {
        self.require_mut(id)?.update_working_days(days)
    }

    /// Returns an employee by id.
    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.employees.get(id)
    }

    /// Returns a mutable employee by id.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Employee> {
        self.employees.get_mut(id)
    }

    /// Returns the number of registered employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if no employees are registered.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Iterates over employees in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.employees.values()
    }

    fn require_mut(&mut self, id: &str) -> PayrollResult<&mut Employee> {
        self.employees
            .get_mut(id)
            .ok_or_else(|| PayrollError::EmployeeNotFound { id: id.to_string() })
    }

    fn salaries(&mut self) -> Vec<(Decimal, &Employee)> {
        self.employees
            .values_mut()
            .map(|employee| {
                let salary = employee.calculate_salary();
                let employee: &Employee = employee;
                (salary, employee)
            })
            .collect()
    }
}
