//! Branch Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Branch {
    pub id: i64,
    pub branch_code: String,
    pub branch_name: String,
    pub company_id: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BranchCreate {
    pub branch_code: String,
    pub branch_name: String,
    pub company_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BranchUpdate {
    pub branch_code: Option<String>,
    pub branch_name: Option<String>,
    pub company_id: Option<i64>,
    pub is_active: Option<bool>,
}
