//! User input validation
//!
//! Usernames and passwords are trimmed and must be non-empty. Nothing else
//! is checked; passwords are kept as given (no hashing).

use super::ValidationError;

/// Trimmed, non-empty username
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Create a username from raw input.
    ///
    /// # Example
    /// ```
    /// use userbase_server::models::Username;
    ///
    /// assert_eq!(Username::new("  alice ").unwrap().as_str(), "alice");
    /// assert!(Username::new("   ").is_err());
    /// ```
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "Username" });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Signup input: both fields trimmed and non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: Username,
    pub password: String,
}

impl NewUser {
    pub fn new(username: &str, password: &str) -> Result<Self, ValidationError> {
        let password = password.trim();
        match Username::new(username) {
            Ok(username) if !password.is_empty() => Ok(Self {
                username,
                password: password.to_owned(),
            }),
            _ => Err(ValidationError::MissingCredentials),
        }
    }
}
