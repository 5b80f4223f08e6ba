use crate::api::employees::employee_dto::EmployeeDto;
use crate::api::leaves::leave_dto::LeaveDto;

use hr_core::LeaveDetail;

use serde::Serialize;

/// Leave request joined with the requesting employee's profile, for review
/// listings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveDetailDto {
    #[serde(flatten)]
    pub leave: LeaveDto,
    pub employee: EmployeeDto,
}

impl From<LeaveDetail> for LeaveDetailDto {
    fn from(detail: LeaveDetail) -> Self {
        Self {
            leave: detail.leave.into(),
            employee: detail.employee.into(),
        }
    }
}
