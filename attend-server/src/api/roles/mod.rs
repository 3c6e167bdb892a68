//! Role API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Role router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/roles", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", axum::routing::put(handler::update))
}
