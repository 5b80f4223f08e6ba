use crate::SalaryRecord;

use chrono::NaiveDate;
use uuid::Uuid;

#[test]
fn test_salary_record_computes_net() {
    let employee_id = Uuid::new_v4();
    let pay_date = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
    let record = SalaryRecord::new(employee_id, 3000.0, 500.0, 200.0, pay_date);

    assert_eq!(record.employee_id, employee_id);
    assert_eq!(record.net_salary, 3300.0);
    assert_eq!(record.pay_date, pay_date);
}

#[test]
fn test_salary_record_net_can_be_zero() {
    let pay_date = NaiveDate::from_ymd_opt(2025, 2, 28).unwrap();
    let record = SalaryRecord::new(Uuid::new_v4(), 1000.0, 0.0, 1000.0, pay_date);

    assert_eq!(record.net_salary, 0.0);
}
