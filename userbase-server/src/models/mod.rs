//! Domain models with validation at construction
//!
//! Input is trimmed and checked when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod user;
pub mod validation;

pub use user::{NewUser, Username};
pub use validation::ValidationError;
