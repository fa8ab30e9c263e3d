//! File and console adapters around the salary system.
//!
//! - [`csv_loader`]: builds employees from the per-type CSV files
//! - [`csv_export`]: writes a payroll report as CSV
//! - [`console`]: text rendering for the batch run

pub mod console;
pub mod csv_export;
pub mod csv_loader;

pub use console::{render_employee_line, render_summary};
pub use csv_export::{PAYROLL_HEADER, export_payroll_csv, write_payroll_csv};
pub use csv_loader::{
    LoadOutcome, load_contract, load_daily_wage, load_employees, load_employees_from_file,
    load_salaried,
};
