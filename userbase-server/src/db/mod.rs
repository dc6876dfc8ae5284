//! Database layer - connection manager and repositories
//!
//! # Design Principles
//!
//! - One connection, no pool - guarded by an async mutex
//! - Bounded retries with a fixed interval when connecting
//! - Rely on DB constraints, handle conflicts - no check-then-insert
//! - One statement per operation, autocommit

pub mod config;
pub mod error;
pub mod manager;
pub mod repos;
pub mod schema;

pub use config::DbConfig;
pub use error::DbError;
pub use manager::{redact_url, ConnectionManager, Handle, RetryPolicy};
pub use repos::*;
