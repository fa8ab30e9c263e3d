//! The salary system: an in-memory employee registry with bulk adjustment,
//! filtering, sorting and payroll reporting.

mod outcome;
mod salary_system;

pub use outcome::{AdjustmentFailure, BulkAdjustment, IncrementOutcome, RemovalOutcome};
pub use salary_system::SalarySystem;
