//! Role Repository

use super::{RepoError, RepoResult};
use crate::db::models::{Role, RoleCreate, RoleUpdate};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Role>> {
    let roles = sqlx::query_as::<_, Role>(
        "SELECT id, role_code, role_name, is_active, created_at FROM role_master ORDER BY role_name",
    )
    .fetch_all(pool)
    .await?;
    Ok(roles)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Role>> {
    let role = sqlx::query_as::<_, Role>(
        "SELECT id, role_code, role_name, is_active, created_at FROM role_master WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(role)
}

pub async fn create(pool: &SqlitePool, data: RoleCreate) -> RepoResult<Role> {
    let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM role_master WHERE role_code = ?")
        .bind(&data.role_code)
        .fetch_optional(pool)
        .await?;
    if existing.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Role code '{}' already exists",
            data.role_code
        )));
    }

    let result = sqlx::query("INSERT INTO role_master (role_code, role_name) VALUES (?, ?)")
        .bind(&data.role_code)
        .bind(&data.role_name)
        .execute(pool)
        .await?;

    find_by_id(pool, result.last_insert_rowid())
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create role".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: RoleUpdate) -> RepoResult<Role> {
    let rows = sqlx::query(
        "UPDATE role_master SET
            role_code = COALESCE(?1, role_code),
            role_name = COALESCE(?2, role_name),
            is_active = COALESCE(?3, is_active)
         WHERE id = ?4",
    )
    .bind(&data.role_code)
    .bind(&data.role_name)
    .bind(data.is_active)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Role {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Role {id} not found")))
}
