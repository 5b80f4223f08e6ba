//! Department REST API handlers.

use crate::api::departments::create_department_request::CreateDepartmentRequest;
use crate::api::departments::department_list_response::DepartmentListResponse;
use crate::api::departments::department_response::DepartmentResponse;
use crate::api::departments::update_department_request::UpdateDepartmentRequest;
use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::auth_user::AuthUser;
use crate::api::message_response::MessageResponse;
use crate::state::AppState;

use hr_core::Department;
use hr_db::DepartmentRepository;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use uuid::Uuid;

/// POST /api/department/add
pub async fn add_department(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(request): Json<CreateDepartmentRequest>,
) -> ApiResult<(StatusCode, Json<DepartmentResponse>)> {
    if request.name.trim().is_empty() {
        return Err(ApiError::validation("Department name is required"));
    }

    let department = Department::new(request.name, request.description);
    DepartmentRepository::new(state.pool.clone())
        .create(&department)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DepartmentResponse {
            success: true,
            department: department.into(),
        }),
    ))
}

/// GET /api/department/
pub async fn list_departments(
    State(state): State<AppState>,
    _user: AuthUser,
) -> ApiResult<Json<DepartmentListResponse>> {
    let departments = DepartmentRepository::new(state.pool.clone())
        .find_all()
        .await?;

    Ok(Json(DepartmentListResponse {
        success: true,
        count: departments.len(),
        departments: departments.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/department/{id}
pub async fn get_department(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DepartmentResponse>> {
    let department_id = Uuid::parse_str(&id)?;

    let department = DepartmentRepository::new(state.pool.clone())
        .find_by_id(department_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Department not found"))?;

    Ok(Json(DepartmentResponse {
        success: true,
        department: department.into(),
    }))
}

/// PUT /api/department/{id}
pub async fn update_department(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<String>,
    Json(request): Json<UpdateDepartmentRequest>,
) -> ApiResult<Json<DepartmentResponse>> {
    let department_id = Uuid::parse_str(&id)?;
    let repo = DepartmentRepository::new(state.pool.clone());

    let mut department = repo
        .find_by_id(department_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Department not found"))?;

    if let Some(name) = request.name {
        if name.trim().is_empty() {
            return Err(ApiError::validation("Department name cannot be empty"));
        }
        department.name = name;
    }
    if let Some(description) = request.description {
        department.description = Some(description);
    }
    department.updated_at = Utc::now();

    repo.update(&department).await?;

    Ok(Json(DepartmentResponse {
        success: true,
        department: department.into(),
    }))
}

/// DELETE /api/department/{id}
///
/// Employees referencing the department fall back to no department.
pub async fn delete_department(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let department_id = Uuid::parse_str(&id)?;

    let removed = DepartmentRepository::new(state.pool.clone())
        .delete(department_id)
        .await?;
    if removed == 0 {
        return Err(ApiError::not_found("Department not found"));
    }

    Ok(Json(MessageResponse::new("Department deleted successfully")))
}
