use crate::Result as DbErrorResult;
use crate::repositories::row::{parse_date, parse_timestamp, parse_uuid};

use hr_core::SalaryRecord;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct SalaryRepository {
    pool: SqlitePool,
}

impl SalaryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, record: &SalaryRecord) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO salary_records (
                    id, employee_id, basic_salary, allowances, deductions,
                    net_salary, pay_date, created_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.id.to_string())
        .bind(record.employee_id.to_string())
        .bind(record.basic_salary)
        .bind(record.allowances)
        .bind(record.deductions)
        .bind(record.net_salary)
        .bind(record.pay_date.to_string())
        .bind(record.created_at.timestamp())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Payroll history, newest first.
    pub async fn list_by_employee(&self, employee_id: Uuid) -> DbErrorResult<Vec<SalaryRecord>> {
        let rows = sqlx::query(
            r#"
                SELECT id, employee_id, basic_salary, allowances, deductions,
                    net_salary, pay_date, created_at
                FROM salary_records
                WHERE employee_id = ?
                ORDER BY pay_date DESC, created_at DESC
            "#,
        )
        .bind(employee_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_salary_record).collect()
    }
}

fn map_salary_record(row: &SqliteRow) -> DbErrorResult<SalaryRecord> {
    let id: String = row.try_get("id")?;
    let employee_id: String = row.try_get("employee_id")?;
    let pay_date: String = row.try_get("pay_date")?;

    Ok(SalaryRecord {
        id: parse_uuid(&id, "salary_records.id")?,
        employee_id: parse_uuid(&employee_id, "salary_records.employee_id")?,
        basic_salary: row.try_get("basic_salary")?,
        allowances: row.try_get("allowances")?,
        deductions: row.try_get("deductions")?,
        net_salary: row.try_get("net_salary")?,
        pay_date: parse_date(&pay_date, "salary_records.pay_date")?,
        created_at: parse_timestamp(row.try_get("created_at")?, "salary_records.created_at")?,
    })
}
