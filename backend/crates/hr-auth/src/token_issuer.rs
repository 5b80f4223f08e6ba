use crate::{AuthError, Claims, Result as AuthErrorResult};

use hr_core::Role;

use std::panic::Location;

use chrono::{Duration, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

/// Signs session tokens with the shared HS256 secret.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    ttl_minutes: i64,
}

impl TokenIssuer {
    pub fn with_hs256(secret: &[u8], ttl_minutes: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            ttl_minutes,
        }
    }

    /// Issue a token for a freshly authenticated user.
    #[track_caller]
    pub fn issue(&self, user_id: Uuid, role: Role) -> AuthErrorResult<String> {
        let now = Utc::now();
        let exp = now
            .checked_add_signed(Duration::minutes(self.ttl_minutes))
            .unwrap_or(now)
            .timestamp();

        let claims = Claims {
            sub: user_id.to_string(),
            role: role.as_str().to_string(),
            exp,
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| AuthError::JwtEncode {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
