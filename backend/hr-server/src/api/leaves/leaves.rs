//! Leave request REST API handlers.

use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::auth_user::AuthUser;
use crate::api::leaves::create_leave_request::CreateLeaveRequest;
use crate::api::leaves::leave_list_response::LeaveListResponse;
use crate::api::leaves::leave_response::LeaveResponse;
use crate::api::leaves::leave_review_list_response::LeaveReviewListResponse;
use crate::api::leaves::update_leave_status_request::UpdateLeaveStatusRequest;
use crate::api::message_response::MessageResponse;
use crate::api::resolve::resolve_employee;
use crate::state::AppState;

use hr_core::{LeaveRequest, LeaveStatus};
use hr_db::{EmployeeRepository, LeaveRepository};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

/// POST /api/leave/add
///
/// Filed against the requester's user id; the employee row is resolved from
/// it. Requests start pending.
pub async fn add_leave(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(request): Json<CreateLeaveRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    if request.leave_type.is_empty() || request.reason.is_empty() {
        return Err(ApiError::validation("Leave type and reason are required"));
    }

    let user_id = Uuid::parse_str(&request.user_id)?;
    let employee = EmployeeRepository::new(state.pool.clone())
        .find_by_user_id(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Employee not found"))?;

    let start_date = parse_date(&request.start_date, "start date")?;
    let end_date = parse_date(&request.end_date, "end date")?;
    if end_date < start_date {
        return Err(ApiError::validation("End date must not precede start date"));
    }

    let leave = LeaveRequest::new(
        employee.id,
        request.leave_type,
        start_date,
        end_date,
        request.reason,
    );
    LeaveRepository::new(state.pool.clone()).create(&leave).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Leave requested successfully")),
    ))
}

/// GET /api/leave/
///
/// Every request with requester context, for review.
pub async fn list_leaves(
    State(state): State<AppState>,
    _user: AuthUser,
) -> ApiResult<Json<LeaveReviewListResponse>> {
    let details = LeaveRepository::new(state.pool.clone())
        .list_details()
        .await?;

    Ok(Json(LeaveReviewListResponse {
        success: true,
        count: details.len(),
        leaves: details.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/leave/{id}
///
/// One employee's history; the id is polymorphic over employee and user id.
pub async fn employee_leaves(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<LeaveListResponse>> {
    let employee = resolve_employee(&state.pool, &id).await?;

    let leaves = LeaveRepository::new(state.pool.clone())
        .list_by_employee(employee.id)
        .await?;

    Ok(Json(LeaveListResponse {
        success: true,
        count: leaves.len(),
        leaves: leaves.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/leave/detail/{id}
pub async fn leave_detail(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<LeaveResponse>> {
    let leave_id = Uuid::parse_str(&id)?;

    let detail = LeaveRepository::new(state.pool.clone())
        .detail_by_id(leave_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Leave request not found"))?;

    Ok(Json(LeaveResponse {
        success: true,
        leave: detail.into(),
    }))
}

/// PUT /api/leave/{id}
///
/// Review decision: moves the request between pending/approved/rejected.
pub async fn update_leave_status(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<String>,
    Json(request): Json<UpdateLeaveStatusRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let leave_id = Uuid::parse_str(&id)?;
    let status: LeaveStatus = request
        .status
        .parse()
        .map_err(|_| ApiError::validation("Invalid leave status"))?;

    let touched = LeaveRepository::new(state.pool.clone())
        .update_status(leave_id, status, Utc::now().timestamp())
        .await?;
    if touched == 0 {
        return Err(ApiError::not_found("Leave request not found"));
    }

    Ok(Json(MessageResponse::new("Leave status updated")))
}

fn parse_date(value: &str, what: &str) -> Result<NaiveDate, ApiError> {
    value
        .parse()
        .map_err(|_| ApiError::validation(format!("Invalid {}", what)))
}
