use crate::api::departments::department_dto::DepartmentDto;

use hr_core::{EmployeeProfile, Role};

use chrono::NaiveDate;
use serde::Serialize;

/// Denormalized employee view for JSON serialization: registry attributes
/// merged with the linked user (no credential hash) and department.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub id: String,
    pub user_id: String,
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub profile_image: Option<String>,
    pub dob: Option<NaiveDate>,
    pub gender: Option<String>,
    pub marital_status: Option<String>,
    pub designation: Option<String>,
    pub department: Option<DepartmentDto>,
    pub salary: f64,
}

impl From<EmployeeProfile> for EmployeeDto {
    fn from(profile: EmployeeProfile) -> Self {
        Self {
            id: profile.employee.id.to_string(),
            user_id: profile.employee.user_id.to_string(),
            employee_id: profile.employee.employee_id,
            name: profile.user.name,
            email: profile.user.email,
            role: profile.user.role,
            profile_image: profile.user.profile_image,
            dob: profile.employee.dob,
            gender: profile.employee.gender,
            marital_status: profile.employee.marital_status,
            designation: profile.employee.designation,
            department: profile.department.map(Into::into),
            salary: profile.employee.salary,
        }
    }
}
