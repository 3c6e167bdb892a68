//! Company Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Company {
    pub id: i64,
    pub company_code: String,
    pub company_name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompanyCreate {
    pub company_code: String,
    pub company_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyUpdate {
    pub company_code: Option<String>,
    pub company_name: Option<String>,
    pub is_active: Option<bool>,
}
