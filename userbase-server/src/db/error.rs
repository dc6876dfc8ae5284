//! Database error type

use std::time::Duration;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Driver error, displayed verbatim
    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: i64 },

    #[error("username '{0}' already exists")]
    UsernameTaken(String),

    #[error("database not connected")]
    NotConnected,

    #[error("connection attempt timed out after {0:?}")]
    ConnectTimeout(Duration),

    #[error("failed to connect to DB after {attempts} attempts")]
    ConnectExhausted { attempts: u32 },

    #[error("unsupported database backend: {0}")]
    UnsupportedBackend(String),
}
