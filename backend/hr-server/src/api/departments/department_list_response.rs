use crate::api::departments::department_dto::DepartmentDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DepartmentListResponse {
    pub success: bool,
    pub count: usize,
    pub departments: Vec<DepartmentDto>,
}
