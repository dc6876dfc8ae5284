//! userbase-server: HTTP server over a single user table
//!
//! Exposes signup, login, listing, rename and delete of user records,
//! plus a health check. One database handle is owned by the
//! [`db::ConnectionManager`], established with bounded retries at startup
//! and lazily re-established by the readiness gate when absent.

pub mod db;
pub mod http;
pub mod models;

pub use db::{ConnectionManager, DbConfig, DbError, RetryPolicy};
pub use http::{build_router, run_server, AppState, ServerConfig};
