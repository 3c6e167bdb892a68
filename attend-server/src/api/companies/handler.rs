//! Company API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{Company, CompanyCreate, CompanyUpdate};
use crate::db::repository::{audit, company};
use crate::utils::AppResult;

const TABLE: &str = "company_master";

pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Company>>> {
    let companies = company::find_all(&state.pool).await?;
    Ok(Json(companies))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CompanyCreate>,
) -> AppResult<(StatusCode, Json<Company>)> {
    let company = company::create(&state.pool, payload).await?;
    record_audit(&state, &company, "created").await;
    Ok((StatusCode::CREATED, Json(company)))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<CompanyUpdate>,
) -> AppResult<Json<Company>> {
    let company = company::update(&state.pool, id, payload).await?;
    record_audit(&state, &company, "updated").await;
    Ok(Json(company))
}

async fn record_audit(state: &ServerState, company: &Company, action: &str) {
    let new_values = serde_json::to_value(company).ok();
    if let Err(e) = audit::record(
        &state.pool,
        TABLE,
        &company.id.to_string(),
        action,
        None,
        new_values.as_ref(),
    )
    .await
    {
        tracing::warn!(error = %e, "failed to record audit entry");
    }
}
