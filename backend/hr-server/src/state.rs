use hr_auth::{JwtValidator, TokenIssuer};

use std::path::PathBuf;
use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state. The pool is the only cross-request resource;
/// everything else is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub token_issuer: Arc<TokenIssuer>,
    pub jwt_validator: Arc<JwtValidator>,
    /// Directory profile images are written to and served from.
    pub uploads_dir: PathBuf,
}
