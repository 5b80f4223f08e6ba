#![allow(dead_code)]

//! Test infrastructure for hr-server API tests

use hr_auth::{JwtValidator, TokenIssuer, hash_password};
use hr_core::{Role, User};
use hr_db::UserRepository;
use hr_server::state::AppState;

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::TempDir;
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// Stored hash for accounts that never log in during the test.
pub const STUB_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c3R1YnNhbHQ$c3R1Ymhhc2g";

pub const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

pub struct TestApp {
    pub state: AppState,
    /// Held so the uploads directory outlives the test
    pub uploads: TempDir,
}

impl TestApp {
    pub fn router(&self) -> Router {
        hr_server::build_router(self.state.clone(), hr_server::cors_layer(&[]))
    }
}

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .expect("Failed to enable foreign keys");

    hr_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState plus a temp uploads directory for testing
pub async fn create_test_app() -> TestApp {
    let pool = create_test_pool().await;
    let uploads = tempfile::tempdir().expect("Failed to create uploads dir");

    let state = AppState {
        pool,
        token_issuer: Arc::new(TokenIssuer::with_hs256(TEST_SECRET, 60)),
        jwt_validator: Arc::new(JwtValidator::with_hs256(TEST_SECRET)),
        uploads_dir: uploads.path().to_path_buf(),
    };

    TestApp { state, uploads }
}

/// Seed an admin session without paying for a real hash; the account never
/// logs in, it only presents its token.
pub async fn seed_session(state: &AppState) -> (User, String) {
    let user = User::new(
        "Test Admin".to_string(),
        "test-admin@example.com".to_string(),
        STUB_HASH.to_string(),
        Role::Admin,
    );
    UserRepository::new(state.pool.clone())
        .create(&user)
        .await
        .expect("Failed to seed session user");

    let token = state
        .token_issuer
        .issue(user.id, user.role)
        .expect("Failed to issue token");

    (user, token)
}

/// Seed an account with a real argon2 hash, for login flows.
pub async fn seed_account(state: &AppState, email: &str, password: &str) -> User {
    let hash = hash_password(password).expect("Failed to hash password");
    let user = User::new("Ann".to_string(), email.to_string(), hash, Role::Employee);
    UserRepository::new(state.pool.clone())
        .create(&user)
        .await
        .expect("Failed to seed account");
    user
}

pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Hand-rolled multipart form body for the employee creation endpoint.
pub fn multipart_body(
    fields: &[(&str, &str)],
    image: Option<(&str, &str, &[u8])>,
) -> Request<Body> {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                BOUNDARY, name, value
            )
            .as_bytes(),
        );
    }

    if let Some((file_name, content_type, bytes)) = image {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                BOUNDARY, file_name, content_type
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method("POST")
        .uri("/api/employee/add")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

/// Drive one request through the router and decode the JSON envelope.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
