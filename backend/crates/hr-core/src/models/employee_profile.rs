use crate::{Department, Employee, User};

use serde::Serialize;

/// Denormalized read view: an employee joined with its user (credential hash
/// excluded by the user's serialization) and optional department.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeProfile {
    pub employee: Employee,
    pub user: User,
    pub department: Option<Department>,
}
