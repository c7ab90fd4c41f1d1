//! Router-level tests for `/register` and `/login` over the in-memory store.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;
use users::{MemoryUserRepository, UsersConfig, users_router_generic};

fn app(store: &MemoryUserRepository) -> Router {
    users_router_generic(store.clone(), UsersConfig::default())
}

async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn registration(username: &str, email: &str) -> Value {
    json!({
        "username": username,
        "email": email,
        "password": "securepassword123",
    })
}

#[tokio::test]
async fn register_returns_public_fields_only() {
    let store = MemoryUserRepository::new();

    let (status, body) = post(
        app(&store),
        "/register",
        registration("testuser", "testuser@example.com"),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["username"], "testuser");
    assert_eq!(body["email"], "testuser@example.com");
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn duplicate_email_is_rejected_with_new_username() {
    let store = MemoryUserRepository::new();
    post(
        app(&store),
        "/register",
        registration("testuser", "testuser@example.com"),
    )
    .await;

    let (status, body) = post(
        app(&store),
        "/register",
        registration("otheruser", "testuser@example.com"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Email already registered");
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn duplicate_username_is_rejected() {
    let store = MemoryUserRepository::new();
    post(
        app(&store),
        "/register",
        registration("testuser", "testuser@example.com"),
    )
    .await;

    let (status, body) = post(
        app(&store),
        "/register",
        registration("testuser", "another@example.com"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Username already taken");
}

#[tokio::test]
async fn short_password_is_rejected() {
    let store = MemoryUserRepository::new();

    let (status, body) = post(
        app(&store),
        "/register",
        json!({"username": "shorty", "email": "shorty@example.com", "password": "short"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Password must be at least 8 characters");
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn login_success_returns_user_id() {
    let store = MemoryUserRepository::new();
    let (_, registered) = post(
        app(&store),
        "/register",
        registration("testuser", "testuser@example.com"),
    )
    .await;

    let (status, body) = post(
        app(&store),
        "/login",
        json!({"username": "testuser", "password": "securepassword123"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["user_id"], registered["id"]);
}

#[tokio::test]
async fn wrong_password_and_unknown_user_are_indistinguishable() {
    let store = MemoryUserRepository::new();
    post(
        app(&store),
        "/register",
        registration("testuser", "testuser@example.com"),
    )
    .await;

    let (wrong_status, wrong_body) = post(
        app(&store),
        "/login",
        json!({"username": "testuser", "password": "wrongpassword"}),
    )
    .await;
    let (unknown_status, unknown_body) = post(
        app(&store),
        "/login",
        json!({"username": "nonexistentuser", "password": "wrongpassword"}),
    )
    .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_body, unknown_body);
    assert_eq!(wrong_body["detail"], "Invalid credentials");
}

#[tokio::test]
async fn missing_field_is_a_problem_response() {
    let store = MemoryUserRepository::new();

    let (status, body) = post(app(&store), "/login", json!({"username": "testuser"})).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], 422);
}
