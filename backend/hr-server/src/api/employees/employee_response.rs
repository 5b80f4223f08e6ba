use crate::api::employees::employee_dto::EmployeeDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct EmployeeResponse {
    pub success: bool,
    pub employee: EmployeeDto,
}
