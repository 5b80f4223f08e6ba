//! Leave repository - requests plus the joined review views.

use crate::Result as DbErrorResult;
use crate::repositories::employee_repository::{PROFILE_COLUMNS, map_profile};
use crate::repositories::row::{parse_date, parse_timestamp, parse_uuid, parse_variant};

use hr_core::{LeaveDetail, LeaveRequest, LeaveStatus};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const SELECT_LEAVE: &str = r#"
    SELECT id, employee_id, leave_type, start_date, end_date, reason,
        status, applied_at, updated_at
    FROM leave_requests
"#;

const LEAVE_COLUMNS: &str = r#"
    l.id AS leave_pk, l.leave_type, l.start_date, l.end_date, l.reason,
    l.status AS leave_status, l.applied_at, l.updated_at AS leave_updated_at
"#;

const DETAIL_JOINS: &str = r#"
    FROM leave_requests l
    JOIN employees e ON e.id = l.employee_id
    JOIN users u ON u.id = e.user_id
    LEFT JOIN departments d ON d.id = e.department_id
"#;

/// Aggregate counts behind the dashboard's leave panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaveSummary {
    /// Distinct employees with at least one request.
    pub applied_for: i64,
    pub pending: i64,
    pub approved: i64,
    pub rejected: i64,
}

pub struct LeaveRepository {
    pool: SqlitePool,
}

impl LeaveRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, leave: &LeaveRequest) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO leave_requests (
                    id, employee_id, leave_type, start_date, end_date,
                    reason, status, applied_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(leave.id.to_string())
        .bind(leave.employee_id.to_string())
        .bind(&leave.leave_type)
        .bind(leave.start_date.to_string())
        .bind(leave.end_date.to_string())
        .bind(&leave.reason)
        .bind(leave.status.as_str())
        .bind(leave.applied_at.timestamp())
        .bind(leave.updated_at.timestamp())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<LeaveRequest>> {
        let sql = format!("{} WHERE id = ?", SELECT_LEAVE);
        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| map_leave(&r)).transpose()
    }

    pub async fn list_by_employee(&self, employee_id: Uuid) -> DbErrorResult<Vec<LeaveRequest>> {
        let sql = format!(
            "{} WHERE employee_id = ? ORDER BY applied_at DESC",
            SELECT_LEAVE
        );
        let rows = sqlx::query(&sql)
            .bind(employee_id.to_string())
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(map_leave).collect()
    }

    pub async fn list_details(&self) -> DbErrorResult<Vec<LeaveDetail>> {
        let sql = format!(
            "SELECT {}, {} {} ORDER BY l.applied_at DESC",
            LEAVE_COLUMNS, PROFILE_COLUMNS, DETAIL_JOINS
        );
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        rows.iter().map(map_detail).collect()
    }

    pub async fn detail_by_id(&self, id: Uuid) -> DbErrorResult<Option<LeaveDetail>> {
        let sql = format!(
            "SELECT {}, {} {} WHERE l.id = ?",
            LEAVE_COLUMNS, PROFILE_COLUMNS, DETAIL_JOINS
        );
        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| map_detail(&r)).transpose()
    }

    /// Returns the number of rows touched so callers can 404 a stale id.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: LeaveStatus,
        updated_at: i64,
    ) -> DbErrorResult<u64> {
        let result = sqlx::query("UPDATE leave_requests SET status = ?, updated_at = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(updated_at)
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn summary(&self) -> DbErrorResult<LeaveSummary> {
        let row = sqlx::query(
            r#"
                SELECT
                    COUNT(DISTINCT employee_id) AS applied_for,
                    COALESCE(SUM(CASE WHEN status = 'pending' THEN 1 ELSE 0 END), 0) AS pending,
                    COALESCE(SUM(CASE WHEN status = 'approved' THEN 1 ELSE 0 END), 0) AS approved,
                    COALESCE(SUM(CASE WHEN status = 'rejected' THEN 1 ELSE 0 END), 0) AS rejected
                FROM leave_requests
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(LeaveSummary {
            applied_for: row.try_get("applied_for")?,
            pending: row.try_get("pending")?,
            approved: row.try_get("approved")?,
            rejected: row.try_get("rejected")?,
        })
    }
}

fn map_leave(row: &SqliteRow) -> DbErrorResult<LeaveRequest> {
    let id: String = row.try_get("id")?;
    let employee_id: String = row.try_get("employee_id")?;
    let start_date: String = row.try_get("start_date")?;
    let end_date: String = row.try_get("end_date")?;
    let status: String = row.try_get("status")?;

    Ok(LeaveRequest {
        id: parse_uuid(&id, "leave_requests.id")?,
        employee_id: parse_uuid(&employee_id, "leave_requests.employee_id")?,
        leave_type: row.try_get("leave_type")?,
        start_date: parse_date(&start_date, "leave_requests.start_date")?,
        end_date: parse_date(&end_date, "leave_requests.end_date")?,
        reason: row.try_get("reason")?,
        status: parse_variant(&status, "leave_requests.status")?,
        applied_at: parse_timestamp(row.try_get("applied_at")?, "leave_requests.applied_at")?,
        updated_at: parse_timestamp(row.try_get("updated_at")?, "leave_requests.updated_at")?,
    })
}

fn map_detail(row: &SqliteRow) -> DbErrorResult<LeaveDetail> {
    let employee = map_profile(row)?;

    let leave_pk: String = row.try_get("leave_pk")?;
    let start_date: String = row.try_get("start_date")?;
    let end_date: String = row.try_get("end_date")?;
    let status: String = row.try_get("leave_status")?;

    let leave = LeaveRequest {
        id: parse_uuid(&leave_pk, "leave_requests.id")?,
        employee_id: employee.employee.id,
        leave_type: row.try_get("leave_type")?,
        start_date: parse_date(&start_date, "leave_requests.start_date")?,
        end_date: parse_date(&end_date, "leave_requests.end_date")?,
        reason: row.try_get("reason")?,
        status: parse_variant(&status, "leave_requests.status")?,
        applied_at: parse_timestamp(row.try_get("applied_at")?, "leave_requests.applied_at")?,
        updated_at: parse_timestamp(row.try_get("leave_updated_at")?, "leave_requests.updated_at")?,
    };

    Ok(LeaveDetail { leave, employee })
}
