use crate::Result as DbErrorResult;
use crate::repositories::row::{parse_timestamp, parse_uuid};

use hr_core::Department;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const SELECT_DEPARTMENT: &str = r#"
    SELECT id, name, description, created_at, updated_at
    FROM departments
"#;

pub struct DepartmentRepository {
    pool: SqlitePool,
}

impl DepartmentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, department: &Department) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO departments (id, name, description, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(department.id.to_string())
        .bind(&department.name)
        .bind(&department.description)
        .bind(department.created_at.timestamp())
        .bind(department.updated_at.timestamp())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Department>> {
        let sql = format!("{} WHERE id = ?", SELECT_DEPARTMENT);
        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| map_department(&r)).transpose()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Department>> {
        let sql = format!("{} ORDER BY name", SELECT_DEPARTMENT);
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        rows.iter().map(map_department).collect()
    }

    pub async fn update(&self, department: &Department) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE departments
                SET name = ?, description = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&department.name)
        .bind(&department.description)
        .bind(department.updated_at.timestamp())
        .bind(department.id.to_string())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Returns the number of rows removed. Employees referencing the
    /// department fall back to none via ON DELETE SET NULL.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM departments WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM departments")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

fn map_department(row: &SqliteRow) -> DbErrorResult<Department> {
    let id: String = row.try_get("id")?;

    Ok(Department {
        id: parse_uuid(&id, "departments.id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        created_at: parse_timestamp(row.try_get("created_at")?, "departments.created_at")?,
        updated_at: parse_timestamp(row.try_get("updated_at")?, "departments.updated_at")?,
    })
}
