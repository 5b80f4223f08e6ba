use crate::api::leaves::leave_dto::LeaveDto;

use serde::Serialize;

/// One employee's leave history.
#[derive(Debug, Serialize)]
pub struct LeaveListResponse {
    pub success: bool,
    pub count: usize,
    pub leaves: Vec<LeaveDto>,
}
