//! Company Repository

use super::{RepoError, RepoResult};
use crate::db::models::{Company, CompanyCreate, CompanyUpdate};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Company>> {
    let companies = sqlx::query_as::<_, Company>(
        "SELECT id, company_code, company_name, is_active, created_at, updated_at FROM company_master ORDER BY company_name",
    )
    .fetch_all(pool)
    .await?;
    Ok(companies)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Company>> {
    let company = sqlx::query_as::<_, Company>(
        "SELECT id, company_code, company_name, is_active, created_at, updated_at FROM company_master WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(company)
}

pub async fn create(pool: &SqlitePool, data: CompanyCreate) -> RepoResult<Company> {
    let existing: Option<i64> =
        sqlx::query_scalar("SELECT id FROM company_master WHERE company_code = ?")
            .bind(&data.company_code)
            .fetch_optional(pool)
            .await?;
    if existing.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Company code '{}' already exists",
            data.company_code
        )));
    }

    let result = sqlx::query("INSERT INTO company_master (company_code, company_name) VALUES (?, ?)")
        .bind(&data.company_code)
        .bind(&data.company_name)
        .execute(pool)
        .await?;

    find_by_id(pool, result.last_insert_rowid())
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create company".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: CompanyUpdate) -> RepoResult<Company> {
    let rows = sqlx::query(
        "UPDATE company_master SET
            company_code = COALESCE(?1, company_code),
            company_name = COALESCE(?2, company_name),
            is_active = COALESCE(?3, is_active),
            updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
         WHERE id = ?4",
    )
    .bind(&data.company_code)
    .bind(&data.company_name)
    .bind(data.is_active)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Company {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Company {id} not found")))
}
