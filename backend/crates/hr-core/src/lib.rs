pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::department::Department;
pub use models::employee::Employee;
pub use models::employee_profile::EmployeeProfile;
pub use models::leave_detail::LeaveDetail;
pub use models::leave_request::LeaveRequest;
pub use models::leave_status::LeaveStatus;
pub use models::role::Role;
pub use models::salary_record::SalaryRecord;
pub use models::user::User;

#[cfg(test)]
mod tests;
