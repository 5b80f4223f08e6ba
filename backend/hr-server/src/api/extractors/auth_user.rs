//! Axum extractor for session verification.

use crate::api::error::ApiError;
use crate::state::AppState;

use hr_auth::AuthError;
use hr_core::User;
use hr_db::UserRepository;

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use error_location::ErrorLocation;
use uuid::Uuid;

/// The authenticated user behind a bearer token.
///
/// Decodes and verifies the Authorization header, then resolves the token's
/// subject to a live user row. Any failure rejects the request before the
/// handler runs: missing/invalid/expired token with 401, a vanished user
/// with 404.
pub struct AuthUser(pub User);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .ok_or(AuthError::MissingHeader {
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let value = header.to_str().map_err(|_| AuthError::InvalidToken {
                message: "authorization header is not valid UTF-8".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

            let token = value
                .strip_prefix("Bearer ")
                .ok_or(AuthError::InvalidScheme {
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let claims = state.jwt_validator.validate(token)?;

            let user_id = Uuid::parse_str(&claims.sub).map_err(|e| AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

            let user = UserRepository::new(state.pool.clone())
                .find_by_id(user_id)
                .await?
                .ok_or_else(|| ApiError::not_found("User not found"))?;

            Ok(AuthUser(user))
        }
    }
}
