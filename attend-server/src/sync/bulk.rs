//! Bulk reconciliation passes
//!
//! Full-table sweeps over the employee directory, run from the dashboard
//! mount and from the manual sync action. Both passes are sequential and
//! non-transactional: the first failing row aborts the pass and rows
//! written before it stay committed. Rerunning after a partial failure is
//! safe because the per-row insert is conditioned on absence.

use serde::Serialize;
use sqlx::SqlitePool;

use crate::db::capabilities::SchemaCapabilities;
use crate::db::models::LinkMaster;
use crate::db::repository::{RepoResult, employee, link_master};

/// Insert pass result: `{insertedCount, inserted}` on the wire
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkInsertReport {
    pub inserted_count: usize,
    pub inserted: Vec<LinkMaster>,
}

/// Refresh pass result
#[derive(Debug, Serialize)]
pub struct BulkRefreshReport {
    /// Link rows whose denormalized fields were overwritten
    pub updated: u64,
    /// Link rows with no matching employee, left untouched
    pub orphans: u64,
}

/// Bring the link table up to date with the full active employee
/// population.
///
/// Selects every active, non-cancelled employee in empno order and issues
/// one atomic insert-if-absent per employee keyed on `linkno = empno`.
/// When the schema probe reported no `api_username` column on the
/// directory, the field is left NULL instead of failing the pass.
pub async fn run_insert_pass(
    pool: &SqlitePool,
    capabilities: SchemaCapabilities,
) -> RepoResult<BulkInsertReport> {
    let employees = employee::find_active_non_cancelled(pool).await?;
    tracing::info!(count = employees.len(), "bulk insert pass started");

    let mut inserted = Vec::new();
    for emp in &employees {
        if let Some(row) =
            link_master::insert_if_absent(pool, emp, capabilities.emp_api_username).await?
        {
            inserted.push(row);
        }
    }

    tracing::info!(inserted = inserted.len(), "bulk insert pass finished");
    Ok(BulkInsertReport {
        inserted_count: inserted.len(),
        inserted,
    })
}

/// Push denormalized field changes from the directory onto existing link
/// rows.
///
/// Rows whose `linkno` no longer matches any employee are counted as
/// orphans and left untouched; pruning them is a stakeholder decision this
/// subsystem does not make.
pub async fn run_refresh_pass(pool: &SqlitePool) -> RepoResult<BulkRefreshReport> {
    let links = link_master::find_all(pool).await?;

    let mut updated = 0u64;
    let mut orphans = 0u64;
    for link in &links {
        match employee::find_by_empno(pool, &link.link_no).await? {
            Some(emp) => {
                updated += link_master::update_denormalized(pool, &link.link_no, &emp).await?;
            }
            None => orphans += 1,
        }
    }

    if orphans > 0 {
        tracing::warn!(orphans, "refresh pass skipped link rows with no matching employee");
    }
    tracing::info!(updated, "bulk refresh pass finished");
    Ok(BulkRefreshReport { updated, orphans })
}
