//! Attendance Punch Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Punch {
    pub id: i64,
    pub empno: String,
    pub punch_time: DateTime<Utc>,
    /// "IN" or "OUT"
    pub punch_type: String,
    /// Capture source, e.g. "manual" or "device"
    pub source: String,
    pub device_id: Option<String>,
    pub remarks: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PunchCreate {
    pub empno: String,
    pub punch_type: String,
    /// Defaults to the server clock when omitted
    pub punch_time: Option<DateTime<Utc>>,
    pub source: Option<String>,
    pub device_id: Option<String>,
    pub remarks: Option<String>,
}
