//! Branch Repository

use super::{RepoError, RepoResult};
use crate::db::models::{Branch, BranchCreate, BranchUpdate};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Branch>> {
    let branches = sqlx::query_as::<_, Branch>(
        "SELECT id, branch_code, branch_name, company_id, is_active, created_at, updated_at FROM branch_master ORDER BY branch_name",
    )
    .fetch_all(pool)
    .await?;
    Ok(branches)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Branch>> {
    let branch = sqlx::query_as::<_, Branch>(
        "SELECT id, branch_code, branch_name, company_id, is_active, created_at, updated_at FROM branch_master WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(branch)
}

pub async fn create(pool: &SqlitePool, data: BranchCreate) -> RepoResult<Branch> {
    let existing: Option<i64> =
        sqlx::query_scalar("SELECT id FROM branch_master WHERE branch_code = ?")
            .bind(&data.branch_code)
            .fetch_optional(pool)
            .await?;
    if existing.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Branch code '{}' already exists",
            data.branch_code
        )));
    }

    let result =
        sqlx::query("INSERT INTO branch_master (branch_code, branch_name, company_id) VALUES (?, ?, ?)")
            .bind(&data.branch_code)
            .bind(&data.branch_name)
            .bind(data.company_id)
            .execute(pool)
            .await?;

    find_by_id(pool, result.last_insert_rowid())
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create branch".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: BranchUpdate) -> RepoResult<Branch> {
    let rows = sqlx::query(
        "UPDATE branch_master SET
            branch_code = COALESCE(?1, branch_code),
            branch_name = COALESCE(?2, branch_name),
            company_id = COALESCE(?3, company_id),
            is_active = COALESCE(?4, is_active),
            updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
         WHERE id = ?5",
    )
    .bind(&data.branch_code)
    .bind(&data.branch_name)
    .bind(data.company_id)
    .bind(data.is_active)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Branch {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Branch {id} not found")))
}
