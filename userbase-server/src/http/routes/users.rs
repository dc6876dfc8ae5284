//! User listing, rename and delete endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::MessageResponse;
use crate::db::repos::{User, UserRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, UserId};
use crate::http::server::AppState;
use crate::models::Username;

/// Rename request. A missing username reads as empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RenameRequest {
    pub username: String,
}

/// User list response
#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub status: &'static str,
    pub users: Vec<User>,
}

/// GET /users - all users in storage order
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<UsersResponse>, ApiError> {
    let mut conn = state.db.handle().await?;
    let users = UserRepo::new(&mut conn).list().await?;

    Ok(Json(UsersResponse {
        status: "success",
        users,
    }))
}

/// PUT /user/{id} - change the username
async fn update_user(
    State(state): State<Arc<AppState>>,
    UserId(id): UserId,
    JsonBody(req): JsonBody<RenameRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let username = Username::new(&req.username)?;

    let mut conn = state.db.handle().await?;
    UserRepo::new(&mut conn).rename(id, &username).await?;

    Ok(Json(MessageResponse::success(format!("User {} updated", id))))
}

/// DELETE /user/{id}
async fn delete_user(
    State(state): State<Arc<AppState>>,
    UserId(id): UserId,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut conn = state.db.handle().await?;
    UserRepo::new(&mut conn).delete(id).await?;

    Ok(Json(MessageResponse::success(format!("User {} deleted", id))))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users))
        .route("/user/{id}", put(update_user).delete(delete_user))
}
