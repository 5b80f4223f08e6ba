//! Admin dashboard handler.

use crate::api::dashboard::summary_response::SummaryResponse;
use crate::api::error::Result as ApiResult;
use crate::api::extractors::auth_user::AuthUser;
use crate::state::AppState;

use hr_db::{DepartmentRepository, EmployeeRepository, LeaveRepository};

use axum::{Json, extract::State};

/// GET /api/dashboard/summary
pub async fn dashboard_summary(
    State(state): State<AppState>,
    _user: AuthUser,
) -> ApiResult<Json<SummaryResponse>> {
    let employees = EmployeeRepository::new(state.pool.clone());
    let departments = DepartmentRepository::new(state.pool.clone());
    let leaves = LeaveRepository::new(state.pool.clone());

    let total_employees = employees.count().await?;
    let total_salary = employees.total_salary().await?;
    let total_departments = departments.count().await?;
    let leave_summary = leaves.summary().await?;

    Ok(Json(SummaryResponse {
        success: true,
        total_employees,
        total_departments,
        total_salary,
        leave_summary: leave_summary.into(),
    }))
}
