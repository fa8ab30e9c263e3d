//! HTTP request handlers for the payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use std::collections::BTreeSet;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::PayrollError;
use crate::models::Employee;
use crate::system::{IncrementOutcome, RemovalOutcome, SalarySystem};

use super::request::{
    AdjustmentRequest, ContractExtensionRequest, EmployeeQuery, IncrementRequest, SortOrder,
    WorkingDaysRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, ContractExtensionResponse, EmployeeView, OutcomeResponse,
    SalaryResponse,
};
use super::state::AppState;

type HandlerResult = Result<Response, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/report", get(report_handler))
        .route("/employees", get(list_employees_handler))
        .route("/employees/:id", delete(remove_employee_handler))
        .route("/employees/:id/salary", get(salary_handler))
        .route("/employees/:id/increment", post(increment_handler))
        .route("/employees/:id/working-days", post(working_days_handler))
        .route(
            "/employees/:id/contract-extension",
            post(contract_extension_handler),
        )
        .route("/adjustments", post(adjustment_handler))
        .with_state(state)
}

/// Handler for `GET /report`.
async fn report_handler(State(state): State<AppState>) -> impl IntoResponse {
    let report = state.system().await.generate_report();
    info!(
        report_id = %report.report_id,
        employee_count = report.employee_count,
        total_salary = %report.total_salary,
        "Payroll report served"
    );
    Json(report)
}

/// Handler for `GET /employees`.
///
/// Narrows the registry with its type, salary and hire-date filters, then
/// orders the result by the requested sort.
async fn list_employees_handler(
    State(state): State<AppState>,
    query: Result<Query<EmployeeQuery>, QueryRejection>,
) -> HandlerResult {
    let Query(query) = query.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Invalid employee query");
        ApiErrorResponse::bad_request(ApiError::invalid_query(rejection.body_text()))
    })?;

    let mut system = state.system().await;
    let mut selected: BTreeSet<String> = match query.employee_type {
        Some(employee_type) => ids(system.filter_by_type(employee_type)),
        None => ids(system.iter().collect()),
    };
    if let Some((min, max)) = query.salary_band() {
        let in_band: BTreeSet<String> = ids(system.filter_by_salary(min, max));
        selected.retain(|id| in_band.contains(id));
    }
    if let Some((start, end)) = query.hire_window() {
        let hired: BTreeSet<String> = ids(system.filter_by_hire_date(start, end));
        selected.retain(|id| hired.contains(id));
    }

    let ordered: Vec<String> = match query.sort {
        Some(SortOrder::SalaryAsc) => ids(system.sort_by_salary(true)),
        Some(SortOrder::SalaryDesc) => ids(system.sort_by_salary(false)),
        Some(SortOrder::Name) => ids(system.sort_by_name()),
        None => selected.iter().cloned().collect(),
    };

    let mut employees = Vec::with_capacity(selected.len());
    for id in ordered.iter().filter(|id| selected.contains(*id)) {
        let Some(salary) = system.employee_salary(id) else {
            continue;
        };
        if let Some(employee) = system.get(id) {
            employees.push(EmployeeView::new(employee, salary));
        }
    }

    Ok(Json(employees).into_response())
}

/// Handler for `GET /employees/:id/salary`.
async fn salary_handler(State(state): State<AppState>, Path(id): Path<String>) -> HandlerResult {
    let salary = state
        .system()
        .await
        .employee_salary(&id)
        .ok_or_else(|| PayrollError::EmployeeNotFound { id: id.clone() })?;

    Ok(Json(SalaryResponse { id, salary }).into_response())
}

/// Handler for `DELETE /employees/:id`.
async fn remove_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult {
    let outcome = state.system().await.remove_employee(&id);
    match outcome {
        RemovalOutcome::Removed { .. } => Ok(Json(OutcomeResponse::new(outcome)).into_response()),
        RemovalOutcome::NotFound { .. } => Err(ApiErrorResponse::new(
            StatusCode::NOT_FOUND,
            ApiError::new("EMPLOYEE_NOT_FOUND", outcome.to_string()),
        )),
    }
}

/// Handler for `POST /employees/:id/increment`.
///
/// Unknown ids are `404`; employees that are not salaried are `409`.
async fn increment_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<IncrementRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let request = parse_json(correlation_id, payload)?;

    let mut system = state.system().await;
    if system.get(&id).is_none() {
        return Err(PayrollError::EmployeeNotFound { id }.into());
    }

    match system.apply_increment(&id, request.percentage) {
        Ok(outcome @ IncrementOutcome::Applied { .. }) => {
            info!(correlation_id = %correlation_id, employee_id = %id, "Increment applied");
            Ok(Json(OutcomeResponse::new(outcome)).into_response())
        }
        Ok(outcome @ IncrementOutcome::NotApplicable) => Err(ApiErrorResponse::new(
            StatusCode::CONFLICT,
            ApiError::new("OPERATION_NOT_APPLICABLE", outcome.to_string()),
        )),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Increment rejected");
            Err(err.into())
        }
    }
}

/// Handler for `POST /employees/:id/working-days`.
async fn working_days_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<WorkingDaysRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let request = parse_json(correlation_id, payload)?;

    let mut system = state.system().await;
    system
        .update_working_days(&id, request.days)
        .inspect_err(|err| {
            warn!(correlation_id = %correlation_id, error = %err, "Working days update rejected")
        })?;

    info!(
        correlation_id = %correlation_id,
        employee_id = %id,
        working_days = request.days,
        "Working days updated"
    );
    Ok(Json(employee_view(&mut system, &id)?).into_response())
}

/// Handler for `POST /employees/:id/contract-extension`.
async fn contract_extension_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ContractExtensionRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let request = parse_json(correlation_id, payload)?;

    let mut system = state.system().await;
    let message = system
        .extend_contract(&id, request.months)
        .inspect_err(|err| {
            warn!(correlation_id = %correlation_id, error = %err, "Contract extension rejected")
        })?;

    info!(correlation_id = %correlation_id, employee_id = %id, "{}", message);
    let employee = employee_view(&mut system, &id)?;
    Ok(Json(ContractExtensionResponse { message, employee }).into_response())
}

/// Handler for `POST /adjustments`.
///
/// Always `200`; per-employee rejections are listed in the body.
async fn adjustment_handler(
    State(state): State<AppState>,
    payload: Result<Json<AdjustmentRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let request = parse_json(correlation_id, payload)?;

    let summary = state.system().await.bulk_adjust(
        request.employee_type,
        request.basic_pay,
        request.housing_allowance,
        request.bonus,
    );
    info!(
        correlation_id = %correlation_id,
        employee_type = %request.employee_type,
        adjusted = summary.adjusted,
        rejected = summary.failures.len(),
        "Bulk adjustment processed"
    );
    Ok(Json(summary).into_response())
}

fn ids<C: FromIterator<String>>(employees: Vec<&Employee>) -> C {
    employees
        .into_iter()
        .map(|employee| employee.id().to_string())
        .collect()
}

fn employee_view(system: &mut SalarySystem, id: &str) -> Result<EmployeeView, ApiErrorResponse> {
    let not_found = || PayrollError::EmployeeNotFound { id: id.to_string() };
    let salary = system.employee_salary(id).ok_or_else(not_found)?;
    let employee = system.get(id).ok_or_else(not_found)?;
    Ok(EmployeeView::new(employee, salary))
}

/// Unwraps a JSON body, turning extractor rejections into API errors.
fn parse_json<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    Err(ApiErrorResponse::bad_request(error))
}
