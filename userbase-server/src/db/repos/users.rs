//! User repository
//!
//! One parameterized statement per operation:
//! - create: INSERT, unique violation becomes `UsernameTaken`
//! - rename/delete: zero rows affected becomes `NotFound`

use serde::Serialize;
use sqlx::AnyConnection;
use sqlx::FromRow;

use crate::db::DbError;
use crate::models::{NewUser, Username};

/// Public view of a user record (never includes the password)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
}

/// User repository over the held connection
pub struct UserRepo<'a> {
    conn: &'a mut AnyConnection,
}

impl<'a> UserRepo<'a> {
    pub fn new(conn: &'a mut AnyConnection) -> Self {
        Self { conn }
    }

    /// Insert a user. Duplicate usernames are rejected by the unique constraint.
    pub async fn create(&mut self, user: &NewUser) -> Result<(), DbError> {
        let result = sqlx::query("INSERT INTO users (username, password) VALUES (?, ?)")
            .bind(user.username.as_str())
            .bind(user.password.as_str())
            .execute(&mut *self.conn)
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(DbError::UsernameTaken(user.username.as_str().to_owned()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Exact match on username and plaintext password.
    pub async fn find_by_credentials(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, DbError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username FROM users WHERE username = ? AND password = ?",
        )
        .bind(username)
        .bind(password)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(user)
    }

    /// All users in storage order.
    pub async fn list(&mut self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>("SELECT id, username FROM users")
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(users)
    }

    pub async fn rename(&mut self, id: i64, username: &Username) -> Result<(), DbError> {
        let result = sqlx::query("UPDATE users SET username = ? WHERE id = ?")
            .bind(username.as_str())
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "User",
                id,
            });
        }
        Ok(())
    }

    pub async fn delete(&mut self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "User",
                id,
            });
        }
        Ok(())
    }
}
