use crate::AuthConfig;

fn with_secret(secret: &str) -> AuthConfig {
    AuthConfig {
        jwt_secret: Some(secret.to_string()),
        ..AuthConfig::default()
    }
}

#[test]
fn test_missing_secret_rejected() {
    assert!(AuthConfig::default().validate().is_err());
}

#[test]
fn test_short_secret_rejected() {
    assert!(with_secret("too-short").validate().is_err());
}

#[test]
fn test_sufficient_secret_accepted() {
    assert!(
        with_secret("0123456789abcdef0123456789abcdef")
            .validate()
            .is_ok()
    );
}

#[test]
fn test_non_positive_ttl_rejected() {
    let mut config = with_secret("0123456789abcdef0123456789abcdef");
    config.token_ttl_minutes = 0;

    assert!(config.validate().is_err());
}

#[test]
fn test_empty_admin_credentials_rejected() {
    let mut config = with_secret("0123456789abcdef0123456789abcdef");
    config.admin_password = String::new();

    assert!(config.validate().is_err());
}
