//! Readiness gate middleware
//!
//! Runs before every route. When no database handle is held it reconnects
//! (blocking the request) and answers 503 if that fails. A held handle
//! passes through without a round-trip.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use super::error::ApiError;
use super::server::AppState;

pub async fn require_database(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    if let Err(e) = state.db.ensure_ready().await {
        tracing::warn!(
            method = %request.method(),
            path = %request.uri().path(),
            "Database not ready: {}",
            e
        );
        return ApiError::NotReady.into_response();
    }

    next.run(request).await
}
