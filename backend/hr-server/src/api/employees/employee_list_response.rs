use crate::api::employees::employee_dto::EmployeeDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct EmployeeListResponse {
    pub success: bool,
    pub count: usize,
    pub employees: Vec<EmployeeDto>,
}
