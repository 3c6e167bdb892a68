//! Audit Log Model

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct AuditEntry {
    pub id: i64,
    pub table_name: String,
    pub record_id: String,
    pub action: String,
    pub old_values: Option<String>,
    pub new_values: Option<String>,
    pub performed_at: DateTime<Utc>,
}
