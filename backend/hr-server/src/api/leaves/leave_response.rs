use crate::api::leaves::leave_detail_dto::LeaveDetailDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LeaveResponse {
    pub success: bool,
    pub leave: LeaveDetailDto,
}
