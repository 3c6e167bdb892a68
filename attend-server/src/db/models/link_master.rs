//! Link-Master Model
//!
//! Maps ERP usernames to API usernames for the external attendance
//! integration. JSON field names mirror the legacy column names because the
//! admin UI and the integration consume them verbatim.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

use super::serde_helpers;

/// kbs_api_linkmaster row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkMaster {
    #[serde(rename = "kbs_api_linkmasterid")]
    pub id: i64,
    #[serde(rename = "linkno")]
    pub link_no: String,
    #[serde(rename = "erpusername")]
    pub erp_username: String,
    #[serde(rename = "apiusername")]
    pub api_username: Option<String>,
    #[serde(rename = "empname")]
    pub employee_name: Option<String>,
    #[serde(rename = "linkdate")]
    pub link_date: DateTime<Utc>,
    /// Validity window, maintained by the UI only; never touched by sync
    #[serde(rename = "applicablefrom")]
    pub applicable_from: Option<String>,
    #[serde(rename = "applicableto")]
    pub applicable_to: Option<String>,
    #[serde(with = "serde_helpers::tf_flag")]
    pub active: bool,
    #[serde(with = "serde_helpers::tf_flag")]
    pub cancel: bool,
}

impl LinkMaster {
    /// Active in the link-master sense: active = 'T' and cancel != 'T'
    pub fn is_effective(&self) -> bool {
        self.active && !self.cancel
    }
}

impl FromRow<'_, SqliteRow> for LinkMaster {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        let active: String = row.try_get("active")?;
        let cancel: String = row.try_get("cancel")?;
        Ok(Self {
            id: row.try_get("kbs_api_linkmasterid")?,
            link_no: row.try_get("linkno")?,
            erp_username: row.try_get("erpusername")?,
            api_username: row.try_get("apiusername")?,
            employee_name: row.try_get("empname")?,
            link_date: row.try_get("linkdate")?,
            applicable_from: row.try_get("applicablefrom")?,
            applicable_to: row.try_get("applicableto")?,
            active: serde_helpers::is_true(&active),
            cancel: serde_helpers::is_true(&cancel),
        })
    }
}

/// Create link-master payload (id and linkdate are assigned by the store)
#[derive(Debug, Clone, Deserialize)]
pub struct LinkMasterCreate {
    #[serde(rename = "linkno")]
    pub link_no: Option<String>,
    #[serde(rename = "erpusername")]
    pub erp_username: String,
    #[serde(rename = "apiusername")]
    pub api_username: Option<String>,
    #[serde(rename = "empname")]
    pub employee_name: Option<String>,
    #[serde(rename = "applicablefrom")]
    pub applicable_from: Option<String>,
    #[serde(rename = "applicableto")]
    pub applicable_to: Option<String>,
    #[serde(default = "default_true", with = "serde_helpers::tf_flag")]
    pub active: bool,
    #[serde(default, with = "serde_helpers::tf_flag")]
    pub cancel: bool,
}

fn default_true() -> bool {
    true
}

/// Update link-master payload (partial)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LinkMasterUpdate {
    #[serde(rename = "erpusername")]
    pub erp_username: Option<String>,
    #[serde(rename = "apiusername")]
    pub api_username: Option<String>,
    #[serde(rename = "empname")]
    pub employee_name: Option<String>,
    #[serde(rename = "applicablefrom")]
    pub applicable_from: Option<String>,
    #[serde(rename = "applicableto")]
    pub applicable_to: Option<String>,
    #[serde(default, with = "serde_helpers::tf_flag_opt")]
    pub active: Option<bool>,
    #[serde(default, with = "serde_helpers::tf_flag_opt")]
    pub cancel: Option<bool>,
}
