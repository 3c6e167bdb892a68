//! Bulk Sync API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::sync::{BulkInsertReport, BulkRefreshReport, run_insert_pass, run_refresh_pass};
use crate::utils::AppResult;

/// POST /api/admin/sync-emp-to-linkmaster - run the bulk insert pass
pub async fn insert_pass(State(state): State<ServerState>) -> AppResult<Json<BulkInsertReport>> {
    let report = run_insert_pass(&state.pool, state.capabilities).await?;
    Ok(Json(report))
}

/// PUT /api/admin/sync-emp-to-linkmaster - run the bulk refresh pass
pub async fn refresh_pass(State(state): State<ServerState>) -> AppResult<Json<BulkRefreshReport>> {
    let report = run_refresh_pass(&state.pool).await?;
    Ok(Json(report))
}
