//! Employee Repository

use super::{RepoError, RepoResult};
use crate::db::models::serde_helpers::flag;
use crate::db::models::{Employee, EmployeeCreate, EmployeeUpdate};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, empno, empname, erp_username, api_username, active, cancel, company_id, branch_id, created_at, updated_at";

/// Find all non-cancelled employees
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Employee>> {
    let employees = sqlx::query_as::<_, Employee>(&format!(
        "SELECT {COLUMNS} FROM emp_master WHERE cancel = 'F' ORDER BY empno"
    ))
    .fetch_all(pool)
    .await?;
    Ok(employees)
}

/// Find all employees including cancelled ones
pub async fn find_all_with_cancelled(pool: &SqlitePool) -> RepoResult<Vec<Employee>> {
    let employees = sqlx::query_as::<_, Employee>(&format!(
        "SELECT {COLUMNS} FROM emp_master ORDER BY empno"
    ))
    .fetch_all(pool)
    .await?;
    Ok(employees)
}

/// Source selection for the bulk sync pass: active and not cancelled,
/// in deterministic empno order
pub async fn find_active_non_cancelled(pool: &SqlitePool) -> RepoResult<Vec<Employee>> {
    let employees = sqlx::query_as::<_, Employee>(&format!(
        "SELECT {COLUMNS} FROM emp_master WHERE cancel = 'F' AND active = 'T' ORDER BY empno"
    ))
    .fetch_all(pool)
    .await?;
    Ok(employees)
}

/// Find employee by natural key
pub async fn find_by_empno(pool: &SqlitePool, empno: &str) -> RepoResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>(&format!(
        "SELECT {COLUMNS} FROM emp_master WHERE empno = ? LIMIT 1"
    ))
    .bind(empno)
    .fetch_optional(pool)
    .await?;
    Ok(employee)
}

/// Create a new employee
pub async fn create(pool: &SqlitePool, data: EmployeeCreate) -> RepoResult<Employee> {
    if data.employee_no.trim().is_empty() {
        return Err(RepoError::Validation("employee_no is required".into()));
    }
    if find_by_empno(pool, &data.employee_no).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Employee '{}' already exists",
            data.employee_no
        )));
    }

    sqlx::query(
        "INSERT INTO emp_master (empno, empname, erp_username, api_username, active, cancel, company_id, branch_id)
         VALUES (?, ?, ?, ?, ?, 'F', ?, ?)",
    )
    .bind(&data.employee_no)
    .bind(&data.employee_name)
    .bind(&data.erp_username)
    .bind(&data.api_username)
    .bind(flag(data.is_active))
    .bind(data.company_id)
    .bind(data.branch_id)
    .execute(pool)
    .await?;

    find_by_empno(pool, &data.employee_no)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create employee".into()))
}

/// Update an employee by natural key (empno itself is immutable)
pub async fn update(pool: &SqlitePool, empno: &str, data: EmployeeUpdate) -> RepoResult<Employee> {
    let rows = sqlx::query(
        "UPDATE emp_master SET
            empname = COALESCE(?1, empname),
            erp_username = COALESCE(?2, erp_username),
            api_username = COALESCE(?3, api_username),
            active = COALESCE(?4, active),
            cancel = COALESCE(?5, cancel),
            company_id = COALESCE(?6, company_id),
            branch_id = COALESCE(?7, branch_id),
            updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
         WHERE empno = ?8",
    )
    .bind(&data.employee_name)
    .bind(&data.erp_username)
    .bind(&data.api_username)
    .bind(data.is_active.map(flag))
    .bind(data.is_cancelled.map(flag))
    .bind(data.company_id)
    .bind(data.branch_id)
    .bind(empno)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Employee {empno} not found")));
    }
    find_by_empno(pool, empno)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee {empno} not found")))
}

/// Soft delete: mark the employee inactive
pub async fn deactivate(pool: &SqlitePool, empno: &str) -> RepoResult<Employee> {
    update(
        pool,
        empno,
        EmployeeUpdate {
            is_active: Some(false),
            ..Default::default()
        },
    )
    .await
}
