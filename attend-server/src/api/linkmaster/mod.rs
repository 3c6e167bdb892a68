//! Link-Master Admin API Module
//!
//! The update route takes the row id as a query parameter
//! (`PUT /api/admin/linkmaster?id=7`), matching the legacy admin client.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Link-master router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/admin/linkmaster", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route(
        "/",
        get(handler::list).post(handler::create).put(handler::update),
    )
}
