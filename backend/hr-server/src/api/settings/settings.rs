//! Account settings handlers.

use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::auth_user::AuthUser;
use crate::api::message_response::MessageResponse;
use crate::api::settings::change_password_request::ChangePasswordRequest;
use crate::state::AppState;

use hr_auth::{hash_password, verify_password};
use hr_db::UserRepository;

use axum::{Json, extract::State};
use chrono::Utc;
use uuid::Uuid;

/// PUT /api/setting/change-password
pub async fn change_password(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(request): Json<ChangePasswordRequest>,
) -> ApiResult<Json<MessageResponse>> {
    if request.new_password.is_empty() {
        return Err(ApiError::validation("New password cannot be empty"));
    }

    let user_id = Uuid::parse_str(&request.user_id)?;
    let repo = UserRepository::new(state.pool.clone());

    let user = repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    let stored_hash = user.password_hash;
    let old_password = request.old_password;
    let matches = tokio::task::spawn_blocking(move || verify_password(&old_password, &stored_hash))
        .await
        .map_err(|e| ApiError::internal(format!("Verification task failed: {}", e)))??;

    if !matches {
        return Err(ApiError::unauthorized("Wrong old password"));
    }

    let new_password = request.new_password;
    let new_hash = tokio::task::spawn_blocking(move || hash_password(&new_password))
        .await
        .map_err(|e| ApiError::internal(format!("Hashing task failed: {}", e)))??;

    repo.update_password(user_id, &new_hash, Utc::now().timestamp())
        .await?;

    Ok(Json(MessageResponse::new("Password changed successfully")))
}
