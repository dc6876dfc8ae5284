//! Signup and login endpoints
//!
//! Passwords are stored and compared as plaintext. There is no hashing and
//! no timing-safe comparison; login is an exact-match lookup.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use super::MessageResponse;
use crate::db::repos::{User, UserRepo};
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::NewUser;

/// Signup/login request. Missing fields read as empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub status: &'static str,
    pub msg: &'static str,
    pub user: User,
}

/// POST /signup - create a user
async fn signup(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CredentialsRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let new_user = NewUser::new(&req.username, &req.password)?;

    let mut conn = state.db.handle().await?;
    UserRepo::new(&mut conn).create(&new_user).await?;

    tracing::info!(username = new_user.username.as_str(), "User created");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::success(format!(
            "User '{}' created",
            new_user.username.as_str()
        ))),
    ))
}

/// POST /login - exact credential match
async fn login(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CredentialsRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let mut conn = state.db.handle().await?;
    let user = UserRepo::new(&mut conn)
        .find_by_credentials(req.username.trim(), req.password.trim())
        .await?
        .ok_or(ApiError::Unauthorized)?;

    Ok(Json(LoginResponse {
        status: "success",
        msg: "Login successful",
        user,
    }))
}

/// Auth routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}
