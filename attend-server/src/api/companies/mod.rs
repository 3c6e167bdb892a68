//! Company API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Company router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/companies", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", axum::routing::put(handler::update))
}
