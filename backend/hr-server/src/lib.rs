pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod seed;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{login, verify},
        login_request::LoginRequest,
        login_response::LoginResponse,
        user_dto::UserDto,
        verify_response::VerifyResponse,
    },
    dashboard::{
        dashboard::dashboard_summary,
        summary_response::{LeaveSummaryDto, SummaryResponse},
    },
    departments::{
        create_department_request::CreateDepartmentRequest,
        department_dto::DepartmentDto,
        department_list_response::DepartmentListResponse,
        department_response::DepartmentResponse,
        departments::{
            add_department, delete_department, get_department, list_departments,
            update_department,
        },
        update_department_request::UpdateDepartmentRequest,
    },
    employees::{
        create_employee_request::CreateEmployeeRequest,
        create_employee_response::{CreateEmployeeResponse, NewEmployeeDto},
        employee_dto::EmployeeDto,
        employee_list_response::EmployeeListResponse,
        employee_response::EmployeeResponse,
        employees::{
            add_employee, get_employee, list_employees, list_employees_by_department,
            update_employee,
        },
        update_employee_request::UpdateEmployeeRequest,
    },
    error::{ApiError, Result as ApiResult},
    extractors::auth_user::AuthUser,
    leaves::{
        create_leave_request::CreateLeaveRequest,
        leave_detail_dto::LeaveDetailDto,
        leave_dto::LeaveDto,
        leave_list_response::LeaveListResponse,
        leave_review_list_response::LeaveReviewListResponse,
        leave_response::LeaveResponse,
        leaves::{add_leave, employee_leaves, leave_detail, list_leaves, update_leave_status},
        update_leave_status_request::UpdateLeaveStatusRequest,
    },
    message_response::MessageResponse,
    salaries::{
        create_salary_request::CreateSalaryRequest,
        salaries::{add_salary, salary_history},
        salary_dto::SalaryDto,
        salary_list_response::SalaryListResponse,
    },
    settings::{change_password_request::ChangePasswordRequest, settings::change_password},
};

pub use crate::routes::{build_router, cors_layer};
pub use crate::state::AppState;
