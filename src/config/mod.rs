//! Configuration loading for the payroll engine.
//!
//! This module loads the payroll configuration from YAML: the employee CSV
//! sources, the export destination, the batch run's operations and the
//! optional HTTP server settings.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Log level: {}", loader.config().log_level);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{
    BatchConfig, BulkAdjustmentConfig, DataSources, ExportConfig, HireDateRange, PayrollConfig,
    SalaryRange, ServerConfig,
};
