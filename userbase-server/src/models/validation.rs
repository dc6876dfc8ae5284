//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Signup needs both fields non-empty after trimming
    MissingCredentials,

    /// Field is empty after trimming
    Empty { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCredentials => write!(f, "Username and password required"),
            Self::Empty { field } => write!(f, "{} required", field),
        }
    }
}

impl std::error::Error for ValidationError {}
