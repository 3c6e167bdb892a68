use thiserror::Error;

/// Errors raised during server startup and shutdown
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<crate::utils::AppError> for ServerError {
    fn from(err: crate::utils::AppError) -> Self {
        ServerError::Database(err.to_string())
    }
}

/// Result type for server startup
pub type Result<T> = std::result::Result<T, ServerError>;
