//! Employee identifier resolution.
//!
//! Callers of the read endpoints sometimes only know the user id behind an
//! employee (the login identity), so a single path parameter is polymorphic:
//! it is first treated as an employee id, then retried as a user id. The
//! fallback is an explicit second lookup, not exception-driven control flow.

use crate::api::error::ApiError;

use hr_core::{Employee, EmployeeProfile};
use hr_db::EmployeeRepository;

use sqlx::SqlitePool;
use uuid::Uuid;

/// Resolve an employee-or-user identifier to the full profile view.
///
/// # Resolution Strategy
/// 1. Parse as UUID (a malformed id is a validation error, not a miss)
/// 2. Look up by employee id
/// 3. Fall back to a lookup by linked user id
pub async fn resolve_employee_profile(
    pool: &SqlitePool,
    identifier: &str,
) -> Result<EmployeeProfile, ApiError> {
    let id = Uuid::parse_str(identifier)?;
    let repo = EmployeeRepository::new(pool.clone());

    if let Some(profile) = repo.profile_by_employee_id(id).await? {
        return Ok(profile);
    }

    repo.profile_by_user_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Employee not found"))
}

/// Same dual lookup, returning just the registry row. Used where only the
/// employee's identity matters (leave history, payroll history).
pub async fn resolve_employee(pool: &SqlitePool, identifier: &str) -> Result<Employee, ApiError> {
    let id = Uuid::parse_str(identifier)?;
    let repo = EmployeeRepository::new(pool.clone());

    if let Some(employee) = repo.find_by_id(id).await? {
        return Ok(employee);
    }

    repo.find_by_user_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Employee not found"))
}
