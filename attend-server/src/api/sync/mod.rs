//! Bulk Sync API Module

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

/// Bulk sync router
pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/admin/sync-emp-to-linkmaster",
        post(handler::insert_pass).put(handler::refresh_pass),
    )
}
