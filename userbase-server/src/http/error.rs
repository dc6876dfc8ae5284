//! API error types with IntoResponse
//!
//! Every error renders as `{"status": "error", "msg": ...}`. Unexpected
//! driver errors are logged and relayed to the client as 400 with the raw
//! error text.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Body could not be read as JSON (400)
    BadRequest { message: String },

    /// No user matches the credentials (401)
    Unauthorized,

    /// Target row or route missing (404)
    NotFound { resource: &'static str },

    /// Unique constraint violated (409)
    Conflict,

    /// No database handle and reconnect failed (503)
    NotReady,

    /// Unexpected driver error (400, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            Self::Unauthorized => (StatusCode::UNAUTHORIZED, "Invalid credentials".to_owned()),
            Self::NotFound { resource } => {
                (StatusCode::NOT_FOUND, format!("{} not found", resource))
            }
            Self::Conflict => (StatusCode::CONFLICT, "Username already exists".to_owned()),
            Self::NotReady => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Database not ready".to_owned(),
            ),
            Self::Database(e) => {
                tracing::error!("Database error: {}", e);
                (StatusCode::BAD_REQUEST, e.to_string())
            }
        };

        let body = Json(json!({
            "status": "error",
            "msg": message
        }));

        (status, body).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, .. } => Self::NotFound { resource },
            DbError::UsernameTaken(_) => Self::Conflict,
            DbError::NotConnected | DbError::ConnectExhausted { .. } => Self::NotReady,
            _ => Self::Database(e),
        }
    }
}
