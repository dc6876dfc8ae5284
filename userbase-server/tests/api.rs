//! Router tests against an in-memory SQLite handle

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use userbase_server::{build_router, AppState, ConnectionManager, RetryPolicy};

fn quick_policy() -> RetryPolicy {
    RetryPolicy {
        max_attempts: 2,
        interval: Duration::from_millis(1),
        connect_timeout: Duration::from_secs(5),
    }
}

async fn connected_app() -> Router {
    let db = ConnectionManager::new("sqlite::memory:", quick_policy());
    db.connect().await.expect("connect failed");
    build_router(Arc::new(AppState { db }))
}

fn unreachable_app() -> Router {
    let db = ConnectionManager::new(
        "sqlite:///nonexistent-userbase-dir/usersdb.sqlite",
        quick_policy(),
    );
    build_router(Arc::new(AppState { db }))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn signup(app: &Router, username: &str, password: &str) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        "/signup",
        Some(json!({ "username": username, "password": password })),
    )
    .await
}

async fn login(app: &Router, username: &str, password: &str) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        "/login",
        Some(json!({ "username": username, "password": password })),
    )
    .await
}

async fn list(app: &Router) -> Vec<Value> {
    let (status, body) = send(app, "GET", "/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    body["users"].as_array().cloned().unwrap_or_default()
}

#[tokio::test]
async fn full_lifecycle_scenario() {
    let app = connected_app().await;

    let (status, body) = signup(&app, "alice", "pw1").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "status": "success", "msg": "User 'alice' created" }));

    let (status, body) = signup(&app, "alice", "pw2").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({ "status": "error", "msg": "Username already exists" }));

    let (status, body) = login(&app, "alice", "pw1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "status": "success",
            "msg": "Login successful",
            "user": { "id": 1, "username": "alice" }
        })
    );

    let (status, body) = send(&app, "PUT", "/user/1", Some(json!({ "username": "alice2" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "success", "msg": "User 1 updated" }));

    assert_eq!(list(&app).await, vec![json!({ "id": 1, "username": "alice2" })]);

    let (status, body) = send(&app, "DELETE", "/user/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "success", "msg": "User 1 deleted" }));

    let (status, body) = send(&app, "DELETE", "/user/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "status": "error", "msg": "User not found" }));
}

#[tokio::test]
async fn signup_then_login_returns_created_user() {
    let app = connected_app().await;

    for (i, name) in ["alice", "bob", "carol"].iter().enumerate() {
        let (status, _) = signup(&app, name, "secret").await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = login(&app, name, "secret").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["id"], i as i64 + 1);
        assert_eq!(body["user"]["username"], *name);
    }
}

#[tokio::test]
async fn signup_trims_input() {
    let app = connected_app().await;

    let (status, body) = signup(&app, "  dave ", " pw ").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["msg"], "User 'dave' created");

    let (status, _) = login(&app, "dave", "pw").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn duplicate_signup_keeps_original_row() {
    let app = connected_app().await;
    signup(&app, "alice", "pw1").await;

    let (status, _) = signup(&app, "alice", "pw2").await;
    assert_eq!(status, StatusCode::CONFLICT);

    assert_eq!(login(&app, "alice", "pw1").await.0, StatusCode::OK);
    assert_eq!(login(&app, "alice", "pw2").await.0, StatusCode::UNAUTHORIZED);
    assert_eq!(list(&app).await.len(), 1);
}

#[tokio::test]
async fn blank_signup_fields_are_rejected() {
    let app = connected_app().await;

    for (username, password) in [("", "pw"), ("   ", "pw"), ("alice", ""), ("alice", " \t ")] {
        let (status, body) = signup(&app, username, password).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "status": "error", "msg": "Username and password required" })
        );
    }

    // Missing fields read as empty
    let (status, _) = send(&app, "POST", "/signup", Some(json!({ "username": "alice" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn malformed_body_is_400() {
    let app = connected_app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/signup")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "error");
    assert!(body["msg"].as_str().is_some_and(|msg| !msg.is_empty()));
}

#[tokio::test]
async fn bad_credentials_are_401() {
    let app = connected_app().await;
    signup(&app, "alice", "pw1").await;

    for (username, password) in [("alice", "wrong"), ("nobody", "pw1"), ("", "")] {
        let (status, body) = login(&app, username, password).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "status": "error", "msg": "Invalid credentials" }));
    }
}

#[tokio::test]
async fn list_returns_every_created_user() {
    let app = connected_app().await;
    let names = ["u1", "u2", "u3", "u4", "u5"];
    for name in names {
        signup(&app, name, "pw").await;
    }

    let users = list(&app).await;

    assert_eq!(users.len(), names.len());
    for name in names {
        assert!(users.iter().any(|u| u["username"] == name));
    }
    // Passwords never leave the server
    assert!(users.iter().all(|u| u.get("password").is_none()));
}

#[tokio::test]
async fn update_missing_user_is_404() {
    let app = connected_app().await;
    signup(&app, "alice", "pw").await;

    let (status, body) = send(&app, "PUT", "/user/99", Some(json!({ "username": "x" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "User not found");

    assert_eq!(list(&app).await, vec![json!({ "id": 1, "username": "alice" })]);
}

#[tokio::test]
async fn update_with_blank_username_is_400() {
    let app = connected_app().await;
    signup(&app, "alice", "pw").await;

    let (status, body) = send(&app, "PUT", "/user/1", Some(json!({ "username": "  " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "status": "error", "msg": "Username required" }));

    let (status, _) = send(&app, "PUT", "/user/1", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_to_taken_username_relays_driver_error() {
    let app = connected_app().await;
    signup(&app, "alice", "pw").await;
    signup(&app, "bob", "pw").await;

    let (status, body) = send(&app, "PUT", "/user/2", Some(json!({ "username": "alice" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert!(body["msg"].as_str().is_some_and(|msg| msg.contains("UNIQUE")));
}

#[tokio::test]
async fn delete_removes_exactly_one_row() {
    let app = connected_app().await;
    signup(&app, "alice", "pw").await;
    signup(&app, "bob", "pw").await;

    let (status, _) = send(&app, "DELETE", "/user/1", None).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(list(&app).await, vec![json!({ "id": 2, "username": "bob" })]);

    let (status, _) = send(&app, "DELETE", "/user/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "PUT", "/user/1", Some(json!({ "username": "zed" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_id_is_404() {
    let app = connected_app().await;

    let (status, body) = send(&app, "DELETE", "/user/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "User not found");

    let (status, _) = send(&app, "DELETE", "/user/-1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_ok_while_connected() {
    let app = connected_app().await;

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn unreachable_database_gates_every_route() {
    let app = unreachable_app();

    let requests = [
        ("GET", "/health", None),
        ("GET", "/users", None),
        ("POST", "/signup", Some(json!({ "username": "a", "password": "b" }))),
        ("POST", "/login", Some(json!({ "username": "a", "password": "b" }))),
        ("PUT", "/user/1", Some(json!({ "username": "a" }))),
        ("DELETE", "/user/1", None),
    ];

    for (method, uri, body) in requests {
        let (status, body) = send(&app, method, uri, body).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE, "{} {}", method, uri);
        assert_eq!(body, json!({ "status": "error", "msg": "Database not ready" }));
    }
}

#[tokio::test]
async fn gate_connects_lazily_on_first_request() {
    let db = ConnectionManager::new("sqlite::memory:", quick_policy());
    let state = Arc::new(AppState { db });
    let app = build_router(state.clone());
    assert!(!state.db.is_connected().await);

    let (status, _) = signup(&app, "alice", "pw").await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(state.db.is_connected().await);
}
