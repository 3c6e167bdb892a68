//! API routing module
//!
//! One directory per resource, each exposing `router()` in the shape
//! `Router<ServerState>`; [`router`] merges them and attaches the shared
//! tower-http layers.
//!
//! - [`health`] - health checks
//! - [`companies`] / [`branches`] / [`roles`] - master records
//! - [`employees`] - employee directory (runs the per-profile reconciler)
//! - [`linkmaster`] - admin link-master CRUD
//! - [`sync`] - bulk reconciliation passes
//! - [`punches`] - attendance punch capture
//! - [`audit`] - audit trail

pub mod audit;
pub mod branches;
pub mod companies;
pub mod employees;
pub mod health;
pub mod linkmaster;
pub mod punches;
pub mod roles;
pub mod sync;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Build the full application router
pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(companies::router())
        .merge(branches::router())
        .merge(roles::router())
        .merge(employees::router())
        .merge(linkmaster::router())
        .merge(sync::router())
        .merge(punches::router())
        .merge(audit::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
