//! Audit Trail API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Audit router
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/audit", get(handler::list))
}
