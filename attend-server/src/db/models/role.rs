//! Role Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Role {
    pub id: i64,
    pub role_code: String,
    pub role_name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoleCreate {
    pub role_code: String,
    pub role_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoleUpdate {
    pub role_code: Option<String>,
    pub role_name: Option<String>,
    pub is_active: Option<bool>,
}
