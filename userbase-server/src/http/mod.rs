//! HTTP server layer
//!
//! Axum server with:
//! - Permissive CORS
//! - Request tracing
//! - Readiness gate in front of every route
//! - `{status, msg}` JSON error responses
//! - Graceful shutdown

pub mod error;
pub mod extractors;
pub mod readiness;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
