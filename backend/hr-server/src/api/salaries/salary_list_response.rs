use crate::api::salaries::salary_dto::SalaryDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SalaryListResponse {
    pub success: bool,
    pub count: usize,
    pub salaries: Vec<SalaryDto>,
}
