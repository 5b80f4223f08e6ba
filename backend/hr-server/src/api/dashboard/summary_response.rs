use hr_db::LeaveSummary;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveSummaryDto {
    /// Distinct employees with at least one request.
    pub applied_for: i64,
    pub approved: i64,
    pub pending: i64,
    pub rejected: i64,
}

impl From<LeaveSummary> for LeaveSummaryDto {
    fn from(summary: LeaveSummary) -> Self {
        Self {
            applied_for: summary.applied_for,
            approved: summary.approved,
            pending: summary.pending,
            rejected: summary.rejected,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub success: bool,
    pub total_employees: i64,
    pub total_departments: i64,
    /// Sum of current employee salaries.
    pub total_salary: f64,
    pub leave_summary: LeaveSummaryDto,
}
