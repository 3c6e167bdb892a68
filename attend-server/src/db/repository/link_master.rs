//! Link-Master Repository
//!
//! Storage operations for `kbs_api_linkmaster`. The reconcilers in
//! [`crate::sync`] only ever insert or update rows here; nothing in this
//! module deletes.

use super::{RepoError, RepoResult};
use crate::db::models::serde_helpers::flag;
use crate::db::models::{Employee, LinkMaster, LinkMasterCreate, LinkMasterUpdate};
use chrono::Utc;
use sqlx::SqlitePool;

const COLUMNS: &str = "kbs_api_linkmasterid, linkno, erpusername, apiusername, empname, linkdate, applicablefrom, applicableto, active, cancel";

/// List all link rows ordered by id
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<LinkMaster>> {
    let links = sqlx::query_as::<_, LinkMaster>(&format!(
        "SELECT {COLUMNS} FROM kbs_api_linkmaster ORDER BY kbs_api_linkmasterid"
    ))
    .fetch_all(pool)
    .await?;
    Ok(links)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<LinkMaster>> {
    let link = sqlx::query_as::<_, LinkMaster>(&format!(
        "SELECT {COLUMNS} FROM kbs_api_linkmaster WHERE kbs_api_linkmasterid = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(link)
}

/// Indexed lookup by the ERP username join key. Lowest id wins when the
/// one-active-row invariant has been violated out of band.
pub async fn find_by_erp_username(
    pool: &SqlitePool,
    erp_username: &str,
) -> RepoResult<Option<LinkMaster>> {
    let link = sqlx::query_as::<_, LinkMaster>(&format!(
        "SELECT {COLUMNS} FROM kbs_api_linkmaster WHERE erpusername = ? ORDER BY kbs_api_linkmasterid LIMIT 1"
    ))
    .bind(erp_username)
    .fetch_optional(pool)
    .await?;
    Ok(link)
}

/// Find an effective (active, non-cancelled) row for an ERP username,
/// optionally ignoring one id. Used for the uniqueness validation in the
/// admin API.
pub async fn find_effective_by_erp_username(
    pool: &SqlitePool,
    erp_username: &str,
    exclude_id: Option<i64>,
) -> RepoResult<Option<LinkMaster>> {
    let link = sqlx::query_as::<_, LinkMaster>(&format!(
        "SELECT {COLUMNS} FROM kbs_api_linkmaster
         WHERE erpusername = ? AND active = 'T' AND cancel != 'T'
           AND kbs_api_linkmasterid != ?
         ORDER BY kbs_api_linkmasterid LIMIT 1"
    ))
    .bind(erp_username)
    .bind(exclude_id.unwrap_or(-1))
    .fetch_optional(pool)
    .await?;
    Ok(link)
}

/// Insert one row from the admin API
pub async fn create(pool: &SqlitePool, data: LinkMasterCreate) -> RepoResult<LinkMaster> {
    if data.erp_username.trim().is_empty() {
        return Err(RepoError::Validation("erpusername is required".into()));
    }

    let result = sqlx::query(
        "INSERT INTO kbs_api_linkmaster (linkno, erpusername, apiusername, empname, linkdate, applicablefrom, applicableto, active, cancel)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(data.link_no.unwrap_or_default())
    .bind(&data.erp_username)
    .bind(&data.api_username)
    .bind(&data.employee_name)
    .bind(Utc::now())
    .bind(&data.applicable_from)
    .bind(&data.applicable_to)
    .bind(flag(data.active))
    .bind(flag(data.cancel))
    .execute(pool)
    .await?;

    find_by_id(pool, result.last_insert_rowid())
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create link-master row".into()))
}

/// Partial update by id from the admin API
pub async fn update(pool: &SqlitePool, id: i64, data: LinkMasterUpdate) -> RepoResult<LinkMaster> {
    let rows = sqlx::query(
        "UPDATE kbs_api_linkmaster SET
            erpusername = COALESCE(?1, erpusername),
            apiusername = COALESCE(?2, apiusername),
            empname = COALESCE(?3, empname),
            applicablefrom = COALESCE(?4, applicablefrom),
            applicableto = COALESCE(?5, applicableto),
            active = COALESCE(?6, active),
            cancel = COALESCE(?7, cancel)
         WHERE kbs_api_linkmasterid = ?8",
    )
    .bind(&data.erp_username)
    .bind(&data.api_username)
    .bind(&data.employee_name)
    .bind(&data.applicable_from)
    .bind(&data.applicable_to)
    .bind(data.active.map(flag))
    .bind(data.cancel.map(flag))
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Link-master {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Link-master {id} not found")))
}

/// Write exactly the per-profile sync field set to an existing row
pub async fn update_sync_fields(
    pool: &SqlitePool,
    id: i64,
    erp_username: &str,
    api_username: Option<&str>,
    employee_name: Option<&str>,
    active: bool,
) -> RepoResult<()> {
    let rows = sqlx::query(
        "UPDATE kbs_api_linkmaster SET erpusername = ?, apiusername = ?, empname = ?, active = ?
         WHERE kbs_api_linkmasterid = ?",
    )
    .bind(erp_username)
    .bind(api_username)
    .bind(employee_name)
    .bind(flag(active))
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Link-master {id} not found")));
    }
    Ok(())
}

/// Insert the per-profile sync field set as a new row
pub async fn create_from_profile(
    pool: &SqlitePool,
    erp_username: &str,
    api_username: Option<&str>,
    employee_name: Option<&str>,
    active: bool,
) -> RepoResult<LinkMaster> {
    let result = sqlx::query(
        "INSERT INTO kbs_api_linkmaster (linkno, erpusername, apiusername, empname, linkdate, active, cancel)
         VALUES ('', ?, ?, ?, ?, ?, 'F')",
    )
    .bind(erp_username)
    .bind(api_username)
    .bind(employee_name)
    .bind(Utc::now())
    .bind(flag(active))
    .execute(pool)
    .await?;

    find_by_id(pool, result.last_insert_rowid())
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create link-master row".into()))
}

/// One atomic existence-check-plus-insert for the bulk pass, keyed by
/// linkno = empno. Returns the new row when one was inserted, None when the
/// employee already has a link row.
pub async fn insert_if_absent(
    pool: &SqlitePool,
    employee: &Employee,
    copy_api_username: bool,
) -> RepoResult<Option<LinkMaster>> {
    let api_username = if copy_api_username {
        employee.api_username.as_deref()
    } else {
        None
    };

    let result = sqlx::query(
        "INSERT INTO kbs_api_linkmaster (linkno, empname, erpusername, apiusername, linkdate, active, cancel)
         SELECT ?1, ?2, ?3, ?4, ?5, 'T', 'F'
         WHERE NOT EXISTS (SELECT 1 FROM kbs_api_linkmaster WHERE linkno = ?1)",
    )
    .bind(&employee.employee_no)
    .bind(&employee.employee_name)
    .bind(&employee.erp_username)
    .bind(api_username)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }
    Ok(find_by_id(pool, result.last_insert_rowid()).await?)
}

/// Refresh pass write: overwrite the denormalized fields from the employee
/// directory. Returns the number of rows touched.
pub async fn update_denormalized(
    pool: &SqlitePool,
    link_no: &str,
    employee: &Employee,
) -> RepoResult<u64> {
    let rows = sqlx::query(
        "UPDATE kbs_api_linkmaster SET erpusername = ?, apiusername = ?, empname = ?
         WHERE linkno = ?",
    )
    .bind(&employee.erp_username)
    .bind(&employee.api_username)
    .bind(&employee.employee_name)
    .bind(link_no)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected())
}
