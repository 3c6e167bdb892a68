//! Link-Master Admin API Handlers
//!
//! The one-effective-row-per-erpusername invariant is validated here, not
//! by a schema constraint.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{LinkMaster, LinkMasterCreate, LinkMasterUpdate};
use crate::db::repository::link_master;
use crate::utils::{AppError, AppResult};

pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<LinkMaster>>> {
    let links = link_master::find_all(&state.pool).await?;
    Ok(Json(links))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<LinkMasterCreate>,
) -> AppResult<(StatusCode, Json<LinkMaster>)> {
    if payload.active && !payload.cancel {
        ensure_no_other_effective(&state, &payload.erp_username, None).await?;
    }

    let link = link_master::create(&state.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

#[derive(Deserialize)]
pub struct UpdateQuery {
    pub id: i64,
}

pub async fn update(
    State(state): State<ServerState>,
    Query(query): Query<UpdateQuery>,
    Json(payload): Json<LinkMasterUpdate>,
) -> AppResult<Json<LinkMaster>> {
    let existing = link_master::find_by_id(&state.pool, query.id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Link-master {} not found", query.id)))?;

    let erp_username = payload
        .erp_username
        .clone()
        .unwrap_or_else(|| existing.erp_username.clone());
    let active = payload.active.unwrap_or(existing.active);
    let cancel = payload.cancel.unwrap_or(existing.cancel);
    if active && !cancel {
        ensure_no_other_effective(&state, &erp_username, Some(query.id)).await?;
    }

    let link = link_master::update(&state.pool, query.id, payload).await?;
    Ok(Json(link))
}

async fn ensure_no_other_effective(
    state: &ServerState,
    erp_username: &str,
    exclude_id: Option<i64>,
) -> AppResult<()> {
    if let Some(other) =
        link_master::find_effective_by_erp_username(&state.pool, erp_username, exclude_id).await?
    {
        return Err(AppError::validation(format!(
            "ERP username '{}' already has an active link-master row (id {})",
            erp_username, other.id
        )));
    }
    Ok(())
}
