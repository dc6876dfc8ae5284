//! Database endpoint configuration
//!
//! Only the host is configurable (`DB_HOST`). Credentials and the database
//! name are fixed literals.

/// Host used when `DB_HOST` is not set
pub const DEFAULT_DB_HOST: &str = "app-db.app.svc.cluster.local";

const DB_USER: &str = "root";
const DB_PASS: &str = "rootpass";
const DB_NAME: &str = "usersdb";

/// MySQL endpoint configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    /// Host name, optionally with `:port`
    pub host: String,
}

impl DbConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }

    /// Connection URL for the configured host.
    pub fn url(&self) -> String {
        format!("mysql://{}:{}@{}/{}", DB_USER, DB_PASS, self.host, DB_NAME)
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DB_HOST)
    }
}
