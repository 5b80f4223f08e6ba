use hr_core::SalaryRecord;

use chrono::NaiveDate;
use serde::Serialize;

/// Salary record DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryDto {
    pub id: String,
    pub employee_id: String,
    pub basic_salary: f64,
    pub allowances: f64,
    pub deductions: f64,
    pub net_salary: f64,
    pub pay_date: NaiveDate,
}

impl From<SalaryRecord> for SalaryDto {
    fn from(record: SalaryRecord) -> Self {
        Self {
            id: record.id.to_string(),
            employee_id: record.employee_id.to_string(),
            basic_salary: record.basic_salary,
            allowances: record.allowances,
            deductions: record.deductions,
            net_salary: record.net_salary,
            pay_date: record.pay_date,
        }
    }
}
