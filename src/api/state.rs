//! Application state for the payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::system::SalarySystem;

/// Shared application state.
///
/// Holds the salary system behind a single lock. Queries that compute
/// salaries mutate daily-wage records, so every handler takes the lock
/// exclusively.
#[derive(Clone)]
pub struct AppState {
    system: Arc<Mutex<SalarySystem>>,
}

impl AppState {
    /// Creates a new application state owning the given salary system.
    pub fn new(system: SalarySystem) -> Self {
        Self {
            system: Arc::new(Mutex::new(system)),
        }
    }

    /// Locks the salary system for the duration of a request.
    pub async fn system(&self) -> MutexGuard<'_, SalarySystem> {
        self.system.lock().await
    }
}
