//! Payroll CSV export.

use std::io::Write;
use std::path::Path;

use csv::Writer;
use tracing::info;

use crate::error::{PayrollError, PayrollResult};
use crate::models::PayrollReport;

/// Header row of the exported payroll file.
pub const PAYROLL_HEADER: [&str; 5] = ["ID", "Name", "Type", "Salary", "Hire Date"];

/// Writes the report's payroll lines as CSV to `writer`.
///
/// Salaries are written with exactly two decimals and hire dates as
/// `YYYY-MM-DD`.
///
/// # Example
///
/// ```
/// use payroll_engine::io::write_payroll_csv;
/// use payroll_engine::models::PayrollReport;
///
/// let mut out = Vec::new();
/// write_payroll_csv(&PayrollReport::from_entries(vec![]), &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "ID,Name,Type,Salary,Hire Date\n");
/// ```
pub fn write_payroll_csv<W: Write>(report: &PayrollReport, writer: W) -> PayrollResult<()> {
    write_records(report, Writer::from_writer(writer)).map_err(|e| PayrollError::Export {
        path: "<writer>".to_string(),
        message: e.to_string(),
    })
}

/// Writes the report's payroll lines to a CSV file, replacing it if present.
///
/// # Errors
///
/// Returns [`PayrollError::Export`] if the file cannot be created or written.
pub fn export_payroll_csv<P: AsRef<Path>>(report: &PayrollReport, path: P) -> PayrollResult<()> {
    let path = path.as_ref();
    let to_export_error = |e: csv::Error| PayrollError::Export {
        path: path.display().to_string(),
        message: e.to_string(),
    };

    let writer = Writer::from_path(path).map_err(to_export_error)?;
    write_records(report, writer).map_err(to_export_error)?;

    info!(
        path = %path.display(),
        employees = report.employee_count,
        "Payroll exported"
    );
    Ok(())
}

fn write_records<W: Write>(report: &PayrollReport, mut writer: Writer<W>) -> csv::Result<()> {
    writer.write_record(PAYROLL_HEADER)?;
    for entry in &report.payroll {
        let salary = format!("{:.2}", entry.salary);
        let hire_date = entry.hire_date.to_string();
        writer.write_record([
            entry.id.as_str(),
            entry.name.as_str(),
            entry.employee_type.as_str(),
            salary.as_str(),
            hire_date.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
