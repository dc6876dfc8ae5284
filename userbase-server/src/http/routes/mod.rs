//! Route handlers organized by resource

pub mod auth;
pub mod health;
pub mod users;

use serde::Serialize;

/// `{status: "success", msg}` body shared by mutating routes
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub status: &'static str,
    pub msg: String,
}

impl MessageResponse {
    pub fn success(msg: impl Into<String>) -> Self {
        Self {
            status: "success",
            msg: msg.into(),
        }
    }
}
