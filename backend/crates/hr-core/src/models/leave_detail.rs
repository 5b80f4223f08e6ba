use crate::{EmployeeProfile, LeaveRequest};

use serde::Serialize;

/// Read view for leave review: a request joined with the full profile of the
/// employee who filed it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaveDetail {
    pub leave: LeaveRequest,
    pub employee: EmployeeProfile,
}
