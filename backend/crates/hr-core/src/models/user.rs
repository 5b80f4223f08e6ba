//! User entity - login identity and credential owner.

use crate::Role;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user owns the login identity for exactly one person. Employees hold a
/// non-owning reference to their user; the user is created first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    /// Unique across all users, enforced by the storage layer.
    pub email: String,
    /// Argon2 PHC string. Excluded from every API view.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub role: Role,
    /// Relative path under the public uploads route, e.g. "/uploads/abc.png".
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: String, email: String, password_hash: String, role: Role) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            role,
            profile_image: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_profile_image(mut self, path: Option<String>) -> Self {
        self.profile_image = path;
        self
    }
}
