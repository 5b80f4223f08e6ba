use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateLeaveStatusRequest {
    /// "approved" or "rejected" (or back to "pending")
    pub status: String,
}
