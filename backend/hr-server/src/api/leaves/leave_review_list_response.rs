use crate::api::leaves::leave_detail_dto::LeaveDetailDto;

use serde::Serialize;

/// All leave requests with requester context, for the review screen.
#[derive(Debug, Serialize)]
pub struct LeaveReviewListResponse {
    pub success: bool,
    pub count: usize,
    pub leaves: Vec<LeaveDetailDto>,
}
