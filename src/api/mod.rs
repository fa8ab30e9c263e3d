//! HTTP API for the payroll engine.
//!
//! This module exposes the salary system over REST: the payroll report,
//! filtered employee listings and the per-employee pay operations.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AdjustmentRequest, ContractExtensionRequest, EmployeeQuery, IncrementRequest, SortOrder,
    WorkingDaysRequest,
};
pub use response::{
    ApiError, ApiErrorResponse, ContractExtensionResponse, EmployeeView, OutcomeResponse,
    SalaryResponse,
};
pub use state::AppState;
