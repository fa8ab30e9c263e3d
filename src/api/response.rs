//! Response types for the payroll API.
//!
//! This module defines the success bodies returned by the handlers, the
//! error response structure and the mapping from [`PayrollError`] to HTTP
//! status codes.

use std::fmt::Display;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PayrollError;
use crate::models::Employee;

/// An employee together with the salary computed for this response.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeView {
    /// Current salary, rounded to the cent.
    pub salary: Decimal,
    /// The employee record.
    #[serde(flatten)]
    pub employee: Employee,
}

impl EmployeeView {
    /// Builds a view from an employee and its computed salary.
    pub fn new(employee: &Employee, salary: Decimal) -> Self {
        Self {
            salary,
            employee: employee.clone(),
        }
    }
}

/// Body of `GET /employees/:id/salary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryResponse {
    /// The employee id.
    pub id: String,
    /// Current salary, rounded to the cent.
    pub salary: Decimal,
}

/// An operation outcome together with its human-readable message.
#[derive(Debug, Clone, Serialize)]
pub struct OutcomeResponse<T> {
    /// The outcome itself.
    #[serde(flatten)]
    pub outcome: T,
    /// Display text of the outcome.
    pub message: String,
}

impl<T: Display> OutcomeResponse<T> {
    /// Wraps an outcome, rendering its message.
    pub fn new(outcome: T) -> Self {
        Self {
            message: outcome.to_string(),
            outcome,
        }
    }
}

/// Body of `POST /employees/:id/contract-extension`.
#[derive(Debug, Clone, Serialize)]
pub struct ContractExtensionResponse {
    /// Confirmation message.
    pub message: String,
    /// The employee after the extension.
    pub employee: EmployeeView,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an invalid query string error response.
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::new("INVALID_QUERY", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates an error response with the given status.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }

    /// Creates a `400 Bad Request` error response.
    pub fn bad_request(error: ApiError) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error)
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PayrollError> for ApiErrorResponse {
    fn from(error: PayrollError) -> Self {
        let message = error.to_string();
        match error {
            PayrollError::Validation { field, .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "VALIDATION_ERROR",
                    message,
                    format!("The value supplied for '{}' was rejected", field),
                ),
            ),
            PayrollError::InapplicableOperation { .. } => ApiErrorResponse::new(
                StatusCode::CONFLICT,
                ApiError::new("OPERATION_NOT_APPLICABLE", message),
            ),
            PayrollError::EmployeeNotFound { .. } => ApiErrorResponse::new(
                StatusCode::NOT_FOUND,
                ApiError::new("EMPLOYEE_NOT_FOUND", message),
            ),
            PayrollError::ConfigNotFound { .. } | PayrollError::ConfigParseError { .. } => {
                ApiErrorResponse::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                )
            }
            PayrollError::DataSource { .. } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("DATA_SOURCE_ERROR", "Employee data unavailable", message),
            ),
            PayrollError::InvalidRecord { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_RECORD", message))
            }
            PayrollError::Export { .. } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("EXPORT_ERROR", "Payroll export failed", message),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::RemovalOutcome;
    use chrono::NaiveDate;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_payroll_error_status_mapping() {
        let cases = [
            (
                PayrollError::validation("bonus", "Bonus cannot be negative"),
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
            ),
            (
                PayrollError::InapplicableOperation {
                    operation: "extend_contract".to_string(),
                    employee_type: "salaried".to_string(),
                },
                StatusCode::CONFLICT,
                "OPERATION_NOT_APPLICABLE",
            ),
            (
                PayrollError::EmployeeNotFound {
                    id: "X1".to_string(),
                },
                StatusCode::NOT_FOUND,
                "EMPLOYEE_NOT_FOUND",
            ),
            (
                PayrollError::Export {
                    path: "/tmp/out.csv".to_string(),
                    message: "denied".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
                "EXPORT_ERROR",
            ),
        ];

        for (error, status, code) in cases {
            let response: ApiErrorResponse = error.into();
            assert_eq!(response.status, status);
            assert_eq!(response.error.code, code);
        }
    }

    #[test]
    fn test_outcome_response_flattens_outcome() {
        let response = OutcomeResponse::new(RemovalOutcome::Removed {
            name: "Asha Rao".to_string(),
        });
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["outcome"], "removed");
        assert_eq!(json["name"], "Asha Rao");
        assert_eq!(json["message"], "Employee Asha Rao removed");
    }

    #[test]
    fn test_employee_view_includes_rule_fields() {
        let employee = Employee::daily_wage(
            "D001",
            "Meena",
            NaiveDate::from_ymd_opt(2023, 7, 1).unwrap(),
            Decimal::from(1000),
            20,
        )
        .unwrap();
        let json = serde_json::to_value(EmployeeView::new(&employee, Decimal::from(21000))).unwrap();

        assert_eq!(json["id"], "D001");
        assert_eq!(json["employee_type"], "daily_wage");
        assert_eq!(json["working_days"], 20);
        assert_eq!(json["salary"], "21000");
    }
}
