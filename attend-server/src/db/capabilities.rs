//! Schema capability probe
//!
//! The upstream deployments of the employee directory do not all carry the
//! `api_username` column. Instead of sniffing error messages at request
//! time, the schema is probed once at startup and the result is cached in
//! [`crate::core::ServerState`] as a typed flag.

use serde::Serialize;
use sqlx::SqlitePool;

/// Typed schema capability flags
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SchemaCapabilities {
    /// emp_master has the api_username column
    pub emp_api_username: bool,
}

/// Probe the schema once; call at startup and cache the result
pub async fn probe(pool: &SqlitePool) -> Result<SchemaCapabilities, sqlx::Error> {
    let columns: Vec<String> =
        sqlx::query_scalar("SELECT name FROM pragma_table_info('emp_master')")
            .fetch_all(pool)
            .await?;

    Ok(SchemaCapabilities {
        emp_api_username: columns.iter().any(|c| c == "api_username"),
    })
}
