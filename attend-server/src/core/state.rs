use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::capabilities::{self, SchemaCapabilities};
use crate::db::DbService;

/// Shared application state - cloned into every handler
///
/// Holds the configuration, the SQLite pool and the schema capability
/// flags probed once at startup. Cloning is cheap (the pool is an Arc
/// internally).
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// Schema capabilities probed at startup
    pub capabilities: SchemaCapabilities,
}

impl ServerState {
    /// Build state from an existing pool (used by tests)
    pub fn new(config: Config, pool: SqlitePool, capabilities: SchemaCapabilities) -> Self {
        Self {
            config,
            pool,
            capabilities,
        }
    }

    /// Initialize the server state
    ///
    /// Opens the database (running migrations), then probes the schema
    /// once and caches the typed capability flags.
    pub async fn initialize(config: &Config) -> Result<Self, crate::utils::AppError> {
        let db_service = DbService::new(&config.database_path).await?;
        let pool = db_service.pool;

        let capabilities = capabilities::probe(&pool)
            .await
            .map_err(|e| crate::utils::AppError::database(format!("Schema probe failed: {e}")))?;
        tracing::info!(?capabilities, "Schema capabilities probed");

        Ok(Self::new(config.clone(), pool, capabilities))
    }
}
