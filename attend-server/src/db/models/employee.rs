//! Employee Model
//!
//! `employee_no` is the immutable natural key; `erp_username` joins the
//! directory to the link-master table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

use super::serde_helpers;

/// Employee directory row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub employee_no: String,
    pub employee_name: String,
    pub erp_username: Option<String>,
    pub api_username: Option<String>,
    pub is_active: bool,
    pub is_cancelled: bool,
    pub company_id: Option<i64>,
    pub branch_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Storage keeps the legacy empno/empname column names and 'T'/'F' flags
impl FromRow<'_, SqliteRow> for Employee {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        let active: String = row.try_get("active")?;
        let cancel: String = row.try_get("cancel")?;
        Ok(Self {
            id: row.try_get("id")?,
            employee_no: row.try_get("empno")?,
            employee_name: row.try_get("empname")?,
            erp_username: row.try_get("erp_username")?,
            api_username: row.try_get("api_username")?,
            is_active: serde_helpers::is_true(&active),
            is_cancelled: serde_helpers::is_true(&cancel),
            company_id: row.try_get("company_id")?,
            branch_id: row.try_get("branch_id")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

/// Create employee payload
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeCreate {
    pub employee_no: String,
    pub employee_name: String,
    pub erp_username: Option<String>,
    pub api_username: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub company_id: Option<i64>,
    pub branch_id: Option<i64>,
}

fn default_true() -> bool {
    true
}

/// Update employee payload (employee_no is immutable)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeUpdate {
    pub employee_name: Option<String>,
    pub erp_username: Option<String>,
    pub api_username: Option<String>,
    pub is_active: Option<bool>,
    pub is_cancelled: Option<bool>,
    pub company_id: Option<i64>,
    pub branch_id: Option<i64>,
}
