use crate::api::departments::department_dto::DepartmentDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DepartmentResponse {
    pub success: bool,
    pub department: DepartmentDto,
}
