pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::department_repository::DepartmentRepository;
pub use repositories::employee_repository::EmployeeRepository;
pub use repositories::leave_repository::{LeaveRepository, LeaveSummary};
pub use repositories::salary_repository::SalaryRepository;
pub use repositories::user_repository::UserRepository;

/// Embedded schema migrations, run at startup and by the test harness.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
