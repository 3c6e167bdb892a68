//! Role API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{Role, RoleCreate, RoleUpdate};
use crate::db::repository::{audit, role};
use crate::utils::AppResult;

const TABLE: &str = "role_master";

pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Role>>> {
    let roles = role::find_all(&state.pool).await?;
    Ok(Json(roles))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<RoleCreate>,
) -> AppResult<(StatusCode, Json<Role>)> {
    let role = role::create(&state.pool, payload).await?;
    record_audit(&state, &role, "created").await;
    Ok((StatusCode::CREATED, Json(role)))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<RoleUpdate>,
) -> AppResult<Json<Role>> {
    let role = role::update(&state.pool, id, payload).await?;
    record_audit(&state, &role, "updated").await;
    Ok(Json(role))
}

async fn record_audit(state: &ServerState, role: &Role, action: &str) {
    let new_values = serde_json::to_value(role).ok();
    if let Err(e) = audit::record(
        &state.pool,
        TABLE,
        &role.id.to_string(),
        action,
        None,
        new_values.as_ref(),
    )
    .await
    {
        tracing::warn!(error = %e, "failed to record audit entry");
    }
}
