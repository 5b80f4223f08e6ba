use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One payroll entry. Net salary is derived at creation and stored, so the
/// history stays stable if the formula ever changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRecord {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub basic_salary: f64,
    pub allowances: f64,
    pub deductions: f64,
    pub net_salary: f64,
    pub pay_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl SalaryRecord {
    pub fn new(
        employee_id: Uuid,
        basic_salary: f64,
        allowances: f64,
        deductions: f64,
        pay_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            employee_id,
            basic_salary,
            allowances,
            deductions,
            net_salary: basic_salary + allowances - deductions,
            pay_date,
            created_at: Utc::now(),
        }
    }
}
