//! Authentication handlers: credential login and session echo.

use crate::api::auth::login_request::LoginRequest;
use crate::api::auth::login_response::LoginResponse;
use crate::api::auth::verify_response::VerifyResponse;
use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::auth_user::AuthUser;
use crate::state::AppState;

use hr_auth::verify_password;
use hr_db::UserRepository;

use axum::{Json, extract::State};

/// POST /api/auth/login
///
/// Verify credentials and issue a session token. Unknown email and wrong
/// password produce the same response, so the endpoint leaks no account
/// existence information.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    if request.email.is_empty() || request.password.is_empty() {
        return Err(ApiError::validation("Email and password are required"));
    }

    let user = UserRepository::new(state.pool.clone())
        .find_by_email(&request.email)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;

    // Argon2 verification is CPU-bound; keep it off the request loop.
    let stored_hash = user.password_hash.clone();
    let password = request.password;
    let matches = tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
        .await
        .map_err(|e| ApiError::internal(format!("Verification task failed: {}", e)))??;

    if !matches {
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let token = state.token_issuer.issue(user.id, user.role)?;

    Ok(Json(LoginResponse {
        success: true,
        token,
        user: user.into(),
    }))
}

/// GET /api/auth/verify
///
/// Echo the identity behind the presented token.
pub async fn verify(AuthUser(user): AuthUser) -> Json<VerifyResponse> {
    Json(VerifyResponse {
        success: true,
        user: user.into(),
    })
}
