//! Audit Trail API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::AuditEntry;
use crate::db::repository::audit;
use crate::utils::AppResult;

#[derive(Deserialize, Default)]
pub struct AuditQuery {
    pub limit: Option<i64>,
}

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<AuditQuery>,
) -> AppResult<Json<Vec<AuditEntry>>> {
    let limit = query.limit.unwrap_or(100).clamp(1, 1000);
    let entries = audit::find_recent(&state.pool, limit).await?;
    Ok(Json(entries))
}
