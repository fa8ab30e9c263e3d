//! Core data models for the payroll engine.
//!
//! This module contains the employee record with its pay-rule variants and
//! the payroll report structures.

mod employee;
mod report;

pub use employee::{Employee, EmployeeType, PayRule};
pub use report::{PayrollEntry, PayrollReport};
