//! Repository implementations for database access
//!
//! Repositories borrow the single held connection for the duration of one
//! statement. Conflicts come from the unique constraint, not from a
//! check-then-insert.

pub mod users;

pub use users::{User, UserRepo};
