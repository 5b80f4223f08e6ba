//! Integration tests for authentication and session verification
mod common;

use crate::common::{
    TEST_SECRET, create_test_app, get_request, json_request, seed_account, seed_session, send,
};

use axum::http::StatusCode;
use hr_auth::TokenIssuer;
use serde_json::json;

#[tokio::test]
async fn test_login_returns_token_and_redacted_user() {
    let app = create_test_app().await;
    let user = seed_account(&app.state, "ann@example.com", "pw123").await;

    let request = json_request(
        "POST",
        "/api/auth/login",
        None,
        json!({"email": "ann@example.com", "password": "pw123"}),
    );
    let (status, body) = send(app.router(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["token"].as_str().unwrap().len() > 20);
    assert_eq!(body["user"]["id"], user.id.to_string());
    assert_eq!(body["user"]["email"], "ann@example.com");
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("passwordHash").is_none());
}

#[tokio::test]
async fn test_login_token_authorizes_protected_routes() {
    let app = create_test_app().await;
    seed_account(&app.state, "ann@example.com", "pw123").await;

    let request = json_request(
        "POST",
        "/api/auth/login",
        None,
        json!({"email": "ann@example.com", "password": "pw123"}),
    );
    let (_, body) = send(app.router(), request).await;
    let token = body["token"].as_str().unwrap().to_string();

    let (status, body) = send(app.router(), get_request("/api/employee/", Some(&token))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_login_wrong_password_is_unauthorized() {
    let app = create_test_app().await;
    seed_account(&app.state, "ann@example.com", "pw123").await;

    let request = json_request(
        "POST",
        "/api/auth/login",
        None,
        json!({"email": "ann@example.com", "password": "pw124"}),
    );
    let (status, body) = send(app.router(), request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_unknown_email_mirrors_wrong_password() {
    let app = create_test_app().await;

    let request = json_request(
        "POST",
        "/api/auth/login",
        None,
        json!({"email": "nobody@example.com", "password": "pw123"}),
    );
    let (status, body) = send(app.router(), request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_verify_echoes_authenticated_identity() {
    let app = create_test_app().await;
    let (user, token) = seed_session(&app.state).await;

    let (status, body) = send(app.router(), get_request("/api/auth/verify", Some(&token))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], user.id.to_string());
    assert_eq!(body["user"]["role"], "admin");
}

#[tokio::test]
async fn test_missing_token_is_rejected_before_handler() {
    let app = create_test_app().await;

    let (status, body) = send(app.router(), get_request("/api/employee/", None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Token not provided");
}

#[tokio::test]
async fn test_token_signed_with_wrong_key_is_rejected() {
    let app = create_test_app().await;
    let (user, _) = seed_session(&app.state).await;

    let foreign_issuer = TokenIssuer::with_hs256(b"another-secret-key-of-enough-len", 60);
    let forged = foreign_issuer.issue(user.id, user.role).unwrap();

    let (status, body) = send(app.router(), get_request("/api/employee/", Some(&forged))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = create_test_app().await;
    let (user, _) = seed_session(&app.state).await;

    // Negative TTL backdates the expiry beyond the validator's leeway.
    let stale_issuer = TokenIssuer::with_hs256(TEST_SECRET, -120);
    let expired = stale_issuer.issue(user.id, user.role).unwrap();

    let (status, body) = send(app.router(), get_request("/api/employee/", Some(&expired))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn test_token_for_deleted_user_is_not_found() {
    let app = create_test_app().await;

    // Valid signature, but the subject never existed in this database.
    let token = app
        .state
        .token_issuer
        .issue(uuid::Uuid::new_v4(), hr_core::Role::Admin)
        .unwrap();

    let (status, _) = send(app.router(), get_request("/api/employee/", Some(&token))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_bearer_scheme_is_rejected() {
    let app = create_test_app().await;

    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/api/employee/")
        .header(axum::http::header::AUTHORIZATION, "Basic abc123")
        .body(axum::body::Body::empty())
        .unwrap();
    let (status, _) = send(app.router(), request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
