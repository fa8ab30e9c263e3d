//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while building employees,
//! adjusting pay, loading data and exporting reports.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::Validation {
///     field: "basic_pay".to_string(),
///     message: "Basic pay cannot be negative".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Validation failed for 'basic_pay': Basic pay cannot be negative"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayrollError {
    /// A monetary field or day count was negative or out of range.
    #[error("Validation failed for '{field}': {message}")]
    Validation {
        /// The field that was rejected.
        field: String,
        /// A description of why the value was rejected.
        message: String,
    },

    /// A variant-specific operation was requested on the wrong kind of employee.
    #[error("Operation '{operation}' is not applicable to {employee_type} employees")]
    InapplicableOperation {
        /// The operation that was requested.
        operation: String,
        /// The type tag of the employee it was requested on.
        employee_type: String,
    },

    /// No employee with the given id is registered.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An employee data file could not be read.
    #[error("Failed to read employee data from '{path}': {message}")]
    DataSource {
        /// The file that could not be read.
        path: String,
        /// A description of the IO failure.
        message: String,
    },

    /// A CSV row could not be mapped to an employee.
    #[error("Invalid record on line {line}: {message}")]
    InvalidRecord {
        /// The 1-based line number of the row.
        line: u64,
        /// A description of what was wrong with the row.
        message: String,
    },

    /// The payroll report could not be written.
    #[error("Failed to export payroll to '{path}': {message}")]
    Export {
        /// The destination that failed.
        path: String,
        /// A description of the IO failure.
        message: String,
    },
}

impl PayrollError {
    /// Builds a [`PayrollError::Validation`] for a field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Builds the [`PayrollError::Validation`] reported when an amount leaves
    /// the supported range.
    pub fn out_of_range(field: impl Into<String>) -> Self {
        Self::validation(field, "amount out of range")
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
