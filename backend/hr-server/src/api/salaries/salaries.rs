//! Salary REST API handlers.

use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::auth_user::AuthUser;
use crate::api::message_response::MessageResponse;
use crate::api::resolve::resolve_employee;
use crate::api::salaries::create_salary_request::CreateSalaryRequest;
use crate::api::salaries::salary_list_response::SalaryListResponse;
use crate::state::AppState;

use hr_core::SalaryRecord;
use hr_db::{EmployeeRepository, SalaryRepository};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use uuid::Uuid;

/// POST /api/salary/add
///
/// Net salary is computed server-side: basic + allowances - deductions.
pub async fn add_salary(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(request): Json<CreateSalaryRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let employee_id = Uuid::parse_str(&request.employee_id)?;

    EmployeeRepository::new(state.pool.clone())
        .find_by_id(employee_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Employee not found"))?;

    let pay_date: NaiveDate = request
        .pay_date
        .parse()
        .map_err(|_| ApiError::validation("Invalid pay date"))?;

    let record = SalaryRecord::new(
        employee_id,
        request.basic_salary,
        request.allowances,
        request.deductions,
        pay_date,
    );
    SalaryRepository::new(state.pool.clone())
        .create(&record)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Salary added successfully")),
    ))
}

/// GET /api/salary/{id}
///
/// Payroll history; the id is polymorphic over employee and user id.
pub async fn salary_history(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<SalaryListResponse>> {
    let employee = resolve_employee(&state.pool, &id).await?;

    let records = SalaryRepository::new(state.pool.clone())
        .list_by_employee(employee.id)
        .await?;

    Ok(Json(SalaryListResponse {
        success: true,
        count: records.len(),
        salaries: records.into_iter().map(Into::into).collect(),
    }))
}
