//! Branch API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{Branch, BranchCreate, BranchUpdate};
use crate::db::repository::{audit, branch, company};
use crate::utils::{AppError, AppResult};

const TABLE: &str = "branch_master";

pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Branch>>> {
    let branches = branch::find_all(&state.pool).await?;
    Ok(Json(branches))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BranchCreate>,
) -> AppResult<(StatusCode, Json<Branch>)> {
    if company::find_by_id(&state.pool, payload.company_id)
        .await?
        .is_none()
    {
        return Err(AppError::validation(format!(
            "Company {} does not exist",
            payload.company_id
        )));
    }

    let branch = branch::create(&state.pool, payload).await?;
    record_audit(&state, &branch, "created").await;
    Ok((StatusCode::CREATED, Json(branch)))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<BranchUpdate>,
) -> AppResult<Json<Branch>> {
    let branch = branch::update(&state.pool, id, payload).await?;
    record_audit(&state, &branch, "updated").await;
    Ok(Json(branch))
}

async fn record_audit(state: &ServerState, branch: &Branch, action: &str) {
    let new_values = serde_json::to_value(branch).ok();
    if let Err(e) = audit::record(
        &state.pool,
        TABLE,
        &branch.id.to_string(),
        action,
        None,
        new_values.as_ref(),
    )
    .await
    {
        tracing::warn!(error = %e, "failed to record audit entry");
    }
}
