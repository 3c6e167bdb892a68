//! Branch API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Branch router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/branches", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", axum::routing::put(handler::update))
}
