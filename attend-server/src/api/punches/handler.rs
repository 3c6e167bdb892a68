//! Attendance Punch API Handlers

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{Punch, PunchCreate};
use crate::db::repository::{employee, punch};
use crate::utils::{AppError, AppResult};

#[derive(Deserialize, Default)]
pub struct PunchQuery {
    pub empno: Option<String>,
    /// Calendar date filter, YYYY-MM-DD
    pub date: Option<String>,
}

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<PunchQuery>,
) -> AppResult<Json<Vec<Punch>>> {
    let punches = punch::find(&state.pool, query.empno.as_deref(), query.date.as_deref()).await?;
    Ok(Json(punches))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PunchCreate>,
) -> AppResult<(StatusCode, Json<Punch>)> {
    if employee::find_by_empno(&state.pool, &payload.empno)
        .await?
        .is_none()
    {
        return Err(AppError::validation(format!(
            "Employee {} does not exist",
            payload.empno
        )));
    }

    let punch = punch::create(&state.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(punch)))
}
