//! Attendance Punch Repository

use super::{RepoError, RepoResult};
use crate::db::models::{Punch, PunchCreate};
use chrono::Utc;
use sqlx::SqlitePool;

const COLUMNS: &str = "id, empno, punch_time, punch_type, source, device_id, remarks, created_at";

/// List punches, optionally filtered by employee and calendar date
/// (YYYY-MM-DD), newest first
pub async fn find(
    pool: &SqlitePool,
    empno: Option<&str>,
    date: Option<&str>,
) -> RepoResult<Vec<Punch>> {
    let punches = sqlx::query_as::<_, Punch>(&format!(
        "SELECT {COLUMNS} FROM attendance_punch
         WHERE (?1 IS NULL OR empno = ?1)
           AND (?2 IS NULL OR date(punch_time) = ?2)
         ORDER BY punch_time DESC",
    ))
    .bind(empno)
    .bind(date)
    .fetch_all(pool)
    .await?;
    Ok(punches)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Punch>> {
    let punch = sqlx::query_as::<_, Punch>(&format!(
        "SELECT {COLUMNS} FROM attendance_punch WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(punch)
}

pub async fn create(pool: &SqlitePool, data: PunchCreate) -> RepoResult<Punch> {
    if data.punch_type != "IN" && data.punch_type != "OUT" {
        return Err(RepoError::Validation(format!(
            "Invalid punch_type '{}', expected IN or OUT",
            data.punch_type
        )));
    }

    let result = sqlx::query(
        "INSERT INTO attendance_punch (empno, punch_time, punch_type, source, device_id, remarks)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&data.empno)
    .bind(data.punch_time.unwrap_or_else(Utc::now))
    .bind(&data.punch_type)
    .bind(data.source.as_deref().unwrap_or("manual"))
    .bind(&data.device_id)
    .bind(&data.remarks)
    .execute(pool)
    .await?;

    find_by_id(pool, result.last_insert_rowid())
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create punch".into()))
}
