//! Payroll engine for salaried, contract and daily-wage employees.
//!
//! This crate computes employee salaries under three compensation rules,
//! keeps the employees in a queryable registry and produces payroll
//! reports. Employees are loaded from CSV, reports can be exported as CSV,
//! and the registry can be served over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod system;
