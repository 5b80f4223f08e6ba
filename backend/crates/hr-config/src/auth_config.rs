use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_NAME,
    DEFAULT_ADMIN_PASSWORD, DEFAULT_TOKEN_TTL_MINUTES, MIN_JWT_SECRET_BYTES,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. Required; there is no unauthenticated mode.
    pub jwt_secret: Option<String>,
    pub token_ttl_minutes: i64,
    /// Admin account ensured at startup.
    pub admin_name: String,
    pub admin_email: String,
    pub admin_password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_minutes: DEFAULT_TOKEN_TTL_MINUTES,
            admin_name: String::from(DEFAULT_ADMIN_NAME),
            admin_email: String::from(DEFAULT_ADMIN_EMAIL),
            admin_password: String::from(DEFAULT_ADMIN_PASSWORD),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match &self.jwt_secret {
            None => {
                return Err(ConfigError::invalid(
                    "auth.jwt_secret is required (set HR_AUTH_JWT_SECRET or config.toml)",
                ));
            }
            Some(secret) if secret.len() < MIN_JWT_SECRET_BYTES => {
                return Err(ConfigError::invalid(format!(
                    "auth.jwt_secret must be at least {} bytes, got {}",
                    MIN_JWT_SECRET_BYTES,
                    secret.len()
                )));
            }
            Some(_) => {}
        }

        if self.token_ttl_minutes <= 0 {
            return Err(ConfigError::invalid(format!(
                "auth.token_ttl_minutes must be positive, got {}",
                self.token_ttl_minutes
            )));
        }

        if self.admin_email.is_empty() || self.admin_password.is_empty() {
            return Err(ConfigError::invalid(
                "auth.admin_email and auth.admin_password cannot be empty",
            ));
        }

        Ok(())
    }
}
