use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(Role::Employee.as_str(), "employee");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert_eq!(Role::from_str("employee").unwrap(), Role::Employee);
    assert!(Role::from_str("superuser").is_err());
}

#[test]
fn test_role_default() {
    assert_eq!(Role::default(), Role::Employee);
}
