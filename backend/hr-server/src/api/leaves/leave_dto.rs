use hr_core::{LeaveRequest, LeaveStatus};

use chrono::NaiveDate;
use serde::Serialize;

/// Leave request DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveDto {
    pub id: String,
    pub employee_id: String,
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub applied_at: i64,
}

impl From<LeaveRequest> for LeaveDto {
    fn from(leave: LeaveRequest) -> Self {
        Self {
            id: leave.id.to_string(),
            employee_id: leave.employee_id.to_string(),
            leave_type: leave.leave_type,
            start_date: leave.start_date,
            end_date: leave.end_date,
            reason: leave.reason,
            status: leave.status,
            applied_at: leave.applied_at.timestamp(),
        }
    }
}
