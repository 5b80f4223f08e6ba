pub mod auth_config;
pub mod config;
pub mod cors_config;
pub mod database_config;
pub mod error;
pub mod log_level;
pub mod logging_config;
pub mod server_config;
pub mod uploads_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use cors_config::CorsConfig;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, Result as ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use uploads_config::UploadsConfig;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const MIN_PORT: u16 = 1024;

pub const DEFAULT_DATABASE_PATH: &str = "hr.db";

/// HS256 wants at least as many secret bytes as the hash output.
pub const MIN_JWT_SECRET_BYTES: usize = 32;
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 1440;
pub const DEFAULT_ADMIN_NAME: &str = "Admin";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@gmail.com";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";

pub const DEFAULT_UPLOADS_DIR: &str = "public/uploads";

pub const DEFAULT_LOG_LEVEL_STRING: &str = "info";
pub const DEFAULT_LOG_DIRECTORY: &str = "logs";

#[cfg(test)]
mod tests;
