//! Per-profile reconciler
//!
//! Given one employee-shaped profile, ensure exactly one current link-master
//! row exists for its ERP username.

use serde::Serialize;
use sqlx::SqlitePool;

use crate::db::models::Employee;
use crate::db::repository::{RepoResult, link_master};

/// Profile input for the reconciler. Only `erp_username` is mandatory for a
/// sync to happen; everything else is carried across as-is.
#[derive(Debug, Clone, Default)]
pub struct ProfileSync {
    pub erp_username: Option<String>,
    pub api_username: Option<String>,
    pub full_name: Option<String>,
    pub is_active: Option<bool>,
}

impl From<&Employee> for ProfileSync {
    fn from(employee: &Employee) -> Self {
        Self {
            erp_username: employee.erp_username.clone(),
            api_username: employee.api_username.clone(),
            full_name: Some(employee.employee_name.clone()),
            is_active: Some(employee.is_active),
        }
    }
}

/// What a successful sync did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncAction {
    Created,
    Updated,
}

/// Why a sync was skipped without touching the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    MissingErp,
}

/// Reconciliation result, serialized as
/// `{"synced":true,"action":"created"|"updated"}` or
/// `{"synced":false,"reason":"missing_erp"}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SyncOutcome {
    pub synced: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<SyncAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<SkipReason>,
}

impl SyncOutcome {
    pub fn synced(action: SyncAction) -> Self {
        Self {
            synced: true,
            action: Some(action),
            reason: None,
        }
    }

    pub fn skipped(reason: SkipReason) -> Self {
        Self {
            synced: false,
            action: None,
            reason: Some(reason),
        }
    }
}

/// Ensure exactly one link-master row exists and is current for the
/// profile's ERP username.
///
/// Employees without an ERP account are not link-master candidates: a
/// missing or empty `erp_username` short-circuits with zero store calls.
/// Otherwise the row matched by the indexed `erpusername` lookup receives
/// one update, or one row is inserted when there is no match. The `active`
/// flag is written as false only when the profile says `is_active == false`.
///
/// Store errors propagate unchanged; the caller decides how to surface
/// them. The employee directory is never written here.
pub async fn sync_profile_to_link_master(
    pool: &SqlitePool,
    profile: &ProfileSync,
) -> RepoResult<SyncOutcome> {
    let Some(erp_username) = profile
        .erp_username
        .as_deref()
        .filter(|s| !s.trim().is_empty())
    else {
        return Ok(SyncOutcome::skipped(SkipReason::MissingErp));
    };

    let active = profile.is_active != Some(false);
    let api_username = profile.api_username.as_deref();
    let full_name = profile.full_name.as_deref();

    match link_master::find_by_erp_username(pool, erp_username).await? {
        Some(existing) => {
            link_master::update_sync_fields(
                pool,
                existing.id,
                erp_username,
                api_username,
                full_name,
                active,
            )
            .await?;
            tracing::debug!(erp_username, id = existing.id, "link-master row updated");
            Ok(SyncOutcome::synced(SyncAction::Updated))
        }
        None => {
            let created =
                link_master::create_from_profile(pool, erp_username, api_username, full_name, active)
                    .await?;
            tracing::debug!(erp_username, id = created.id, "link-master row created");
            Ok(SyncOutcome::synced(SyncAction::Created))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_serialization_shapes() {
        let skipped = serde_json::to_value(SyncOutcome::skipped(SkipReason::MissingErp))
            .expect("serialize skipped");
        assert_eq!(
            skipped,
            serde_json::json!({"synced": false, "reason": "missing_erp"})
        );

        let created =
            serde_json::to_value(SyncOutcome::synced(SyncAction::Created)).expect("serialize created");
        assert_eq!(
            created,
            serde_json::json!({"synced": true, "action": "created"})
        );

        let updated =
            serde_json::to_value(SyncOutcome::synced(SyncAction::Updated)).expect("serialize updated");
        assert_eq!(
            updated,
            serde_json::json!({"synced": true, "action": "updated"})
        );
    }
}
