//! Employee API Handlers
//!
//! Create, update and deactivate run the per-profile reconciler after the
//! employee write has committed. A reconciler failure surfaces as the
//! request error; the employee write is not rolled back (the two writes
//! are deliberately not one transaction).

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::{Employee, EmployeeCreate, EmployeeUpdate};
use crate::db::repository::{audit, employee};
use crate::sync::{ProfileSync, SyncOutcome, sync_profile_to_link_master};
use crate::utils::AppResult;

const TABLE: &str = "emp_master";

/// Employee write response: the committed row plus what the reconciler did
#[derive(Serialize)]
pub struct EmployeeSaveResponse {
    pub employee: Employee,
    pub sync: SyncOutcome,
}

/// List non-cancelled employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = employee::find_all(&state.pool).await?;
    Ok(Json(employees))
}

/// List all employees including cancelled
pub async fn list_with_cancelled(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<Employee>>> {
    let employees = employee::find_all_with_cancelled(&state.pool).await?;
    Ok(Json(employees))
}

/// Get employee by natural key
pub async fn get_by_empno(
    State(state): State<ServerState>,
    Path(empno): Path<String>,
) -> AppResult<Json<Employee>> {
    let employee = employee::find_by_empno(&state.pool, &empno)
        .await?
        .ok_or_else(|| crate::utils::AppError::not_found(format!("Employee {empno} not found")))?;
    Ok(Json(employee))
}

/// Create a new employee, then reconcile the link-master row
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<Json<EmployeeSaveResponse>> {
    let employee = employee::create(&state.pool, payload).await?;
    record_audit(&state, &employee, "created").await;

    let sync = sync_profile_to_link_master(&state.pool, &ProfileSync::from(&employee)).await?;
    Ok(Json(EmployeeSaveResponse { employee, sync }))
}

/// Update an employee, then reconcile the link-master row
pub async fn update(
    State(state): State<ServerState>,
    Path(empno): Path<String>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<EmployeeSaveResponse>> {
    let employee = employee::update(&state.pool, &empno, payload).await?;
    record_audit(&state, &employee, "updated").await;

    let sync = sync_profile_to_link_master(&state.pool, &ProfileSync::from(&employee)).await?;
    Ok(Json(EmployeeSaveResponse { employee, sync }))
}

/// Soft delete: mark inactive and push the inactive flag to the link row
pub async fn deactivate(
    State(state): State<ServerState>,
    Path(empno): Path<String>,
) -> AppResult<Json<EmployeeSaveResponse>> {
    let employee = employee::deactivate(&state.pool, &empno).await?;
    record_audit(&state, &employee, "deactivated").await;

    let sync = sync_profile_to_link_master(&state.pool, &ProfileSync::from(&employee)).await?;
    Ok(Json(EmployeeSaveResponse { employee, sync }))
}

async fn record_audit(state: &ServerState, employee: &Employee, action: &str) {
    let new_values = serde_json::to_value(employee).ok();
    if let Err(e) = audit::record(
        &state.pool,
        TABLE,
        &employee.employee_no,
        action,
        None,
        new_values.as_ref(),
    )
    .await
    {
        tracing::warn!(error = %e, "failed to record audit entry");
    }
}
