use crate::{Role, User};

#[test]
fn test_user_new() {
    let user = User::new(
        "Ann".to_string(),
        "ann@example.com".to_string(),
        "$argon2id$stub".to_string(),
        Role::Employee,
    );

    assert_eq!(user.name, "Ann");
    assert_eq!(user.email, "ann@example.com");
    assert_eq!(user.role, Role::Employee);
    assert!(user.profile_image.is_none());
}

#[test]
fn test_user_serialization_never_exposes_hash() {
    let user = User::new(
        "Ann".to_string(),
        "ann@example.com".to_string(),
        "$argon2id$stub".to_string(),
        Role::Admin,
    );

    let json = serde_json::to_value(&user).unwrap();
    assert!(json.get("password_hash").is_none());
    assert_eq!(json["email"], "ann@example.com");
    assert_eq!(json["role"], "admin");
}
