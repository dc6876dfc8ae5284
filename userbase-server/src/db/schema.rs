//! Users table bootstrap
//!
//! Idempotent `CREATE TABLE IF NOT EXISTS`, run on every new connection.

use sqlx::AnyConnection;

use super::error::DbError;

const MYSQL_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id INT AUTO_INCREMENT PRIMARY KEY,
        username VARCHAR(255) NOT NULL UNIQUE,
        password VARCHAR(255) NOT NULL
    )
"#;

const SQLITE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL
    )
"#;

/// Create the users table for the connected backend if it is missing.
pub async fn ensure(conn: &mut AnyConnection) -> Result<(), DbError> {
    let ddl = match conn.backend_name() {
        "MySQL" => MYSQL_USERS_TABLE,
        "SQLite" => SQLITE_USERS_TABLE,
        other => return Err(DbError::UnsupportedBackend(other.to_owned())),
    };

    tracing::debug!(backend = conn.backend_name(), "Ensuring users table");
    sqlx::query(ddl).execute(&mut *conn).await?;

    Ok(())
}
