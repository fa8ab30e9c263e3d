//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the payroll
//! configuration from YAML.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PayrollError, PayrollResult};
use crate::models::EmployeeType;

use super::types::PayrollConfig;

/// File name looked up when [`ConfigLoader::load`] is given a directory.
pub const CONFIG_FILE_NAME: &str = "payroll.yaml";

/// Loads and provides access to the payroll configuration.
///
/// Relative paths inside the configuration (data files, export path) are
/// resolved against the directory that holds the configuration file.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
/// use payroll_engine::models::EmployeeType;
///
/// let loader = ConfigLoader::load("./config")?;
/// let salaried_csv = loader.data_path(EmployeeType::Salaried);
/// println!("Salaried employees from {}", salaried_csv.display());
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
    base_dir: PathBuf,
}

impl ConfigLoader {
    /// Loads configuration from a YAML file, or from `payroll.yaml` inside a
    /// directory.
    ///
    /// # Errors
    ///
    /// - [`PayrollError::ConfigNotFound`] if the file cannot be read
    /// - [`PayrollError::ConfigParseError`] if the YAML is invalid or a
    ///   required field is missing
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let file = if path.is_dir() {
            path.join(CONFIG_FILE_NAME)
        } else {
            path.to_path_buf()
        };
        let path_str = file.display().to_string();

        let content = fs::read_to_string(&file).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let base_dir = file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        Self::from_yaml(&content, base_dir).map_err(|e| match e {
            PayrollError::ConfigParseError { message, .. } => PayrollError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Parses configuration from YAML text, resolving relative paths against
    /// `base_dir`.
    pub fn from_yaml(content: &str, base_dir: impl Into<PathBuf>) -> PayrollResult<Self> {
        let config: PayrollConfig =
            serde_yaml::from_str(content).map_err(|e| PayrollError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            config,
            base_dir: base_dir.into(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the resolved CSV path for an employee type.
    pub fn data_path(&self, employee_type: EmployeeType) -> PathBuf {
        self.resolve(self.config.data.path_for(employee_type))
    }

    /// Returns the resolved export path, if exporting is configured.
    pub fn export_path(&self) -> Option<PathBuf> {
        self.config
            .export
            .as_ref()
            .map(|export| self.resolve(&export.path))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}
