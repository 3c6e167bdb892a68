//! Audit Log Repository
//!
//! Master-record mutations append here. Writes are best effort: callers
//! log a failure instead of failing the request.

use super::RepoResult;
use crate::db::models::AuditEntry;
use sqlx::SqlitePool;

pub async fn record(
    pool: &SqlitePool,
    table_name: &str,
    record_id: &str,
    action: &str,
    old_values: Option<&serde_json::Value>,
    new_values: Option<&serde_json::Value>,
) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO audit_log (table_name, record_id, action, old_values, new_values)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(table_name)
    .bind(record_id)
    .bind(action)
    .bind(old_values.map(|v| v.to_string()))
    .bind(new_values.map(|v| v.to_string()))
    .execute(pool)
    .await?;
    Ok(())
}

/// Most recent entries, newest first
pub async fn find_recent(pool: &SqlitePool, limit: i64) -> RepoResult<Vec<AuditEntry>> {
    let entries = sqlx::query_as::<_, AuditEntry>(
        "SELECT id, table_name, record_id, action, old_values, new_values, performed_at
         FROM audit_log ORDER BY id DESC LIMIT ?",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(entries)
}
