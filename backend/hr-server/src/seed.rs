//! Startup seeding: make sure an admin account exists so a fresh install can
//! log in at all.

use hr_auth::hash_password;
use hr_core::{Role, User};
use hr_db::UserRepository;

use log::{info, warn};
use sqlx::SqlitePool;

/// Ensure the configured admin user exists. Failures are logged, not fatal:
/// the operator may have created the account by other means.
pub async fn ensure_admin_user(pool: &SqlitePool, auth: &hr_config::AuthConfig) {
    let repo = UserRepository::new(pool.clone());

    match repo.find_by_email(&auth.admin_email).await {
        Ok(Some(_)) => {
            info!("Admin user {} already exists, skipping seed", auth.admin_email);
            return;
        }
        Ok(None) => {}
        Err(e) => {
            warn!("Failed to check for admin user: {}", e);
            return;
        }
    }

    let hash = match hash_password(&auth.admin_password) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Failed to hash admin password: {}", e);
            return;
        }
    };

    let admin = User::new(
        auth.admin_name.clone(),
        auth.admin_email.clone(),
        hash,
        Role::Admin,
    );

    match repo.create(&admin).await {
        Ok(()) => info!("Admin user created: {}", auth.admin_email),
        Err(e) => warn!("Failed to create admin user (may already exist): {}", e),
    }
}
