//! Employee repository - registry rows plus the denormalized profile view.
//!
//! Profile queries join the employee with its user (credential hash is never
//! selected) and its optional department. An employee whose user vanished
//! out-of-band drops out of the join and reads as absent.

use crate::Result as DbErrorResult;
use crate::repositories::row::{parse_date, parse_timestamp, parse_uuid, parse_variant};

use hr_core::{Department, Employee, EmployeeProfile, User};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const SELECT_EMPLOYEE: &str = r#"
    SELECT id, user_id, employee_id, dob, gender, marital_status,
        designation, department_id, salary, created_at, updated_at
    FROM employees
"#;

/// Aliased column list shared by every profile join, including the leave
/// review queries. Expects `employees e JOIN users u LEFT JOIN departments d`.
pub(crate) const PROFILE_COLUMNS: &str = r#"
    e.id AS employee_pk, e.user_id, e.employee_id, e.dob, e.gender,
    e.marital_status, e.designation, e.department_id, e.salary,
    e.created_at AS employee_created_at, e.updated_at AS employee_updated_at,
    u.name AS user_name, u.email AS user_email, u.role AS user_role,
    u.profile_image, u.created_at AS user_created_at,
    u.updated_at AS user_updated_at,
    d.name AS department_name, d.description AS department_description,
    d.created_at AS department_created_at, d.updated_at AS department_updated_at
"#;

pub(crate) const PROFILE_JOINS: &str = r#"
    FROM employees e
    JOIN users u ON u.id = e.user_id
    LEFT JOIN departments d ON d.id = e.department_id
"#;

pub struct EmployeeRepository {
    pool: SqlitePool,
}

impl EmployeeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Transactional insert, paired with the user insert in the same
    /// transaction by the create operation.
    pub async fn insert_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
        employee: &Employee,
    ) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO employees (
                    id, user_id, employee_id, dob, gender, marital_status,
                    designation, department_id, salary, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(employee.id.to_string())
        .bind(employee.user_id.to_string())
        .bind(&employee.employee_id)
        .bind(employee.dob.map(|d| d.to_string()))
        .bind(&employee.gender)
        .bind(&employee.marital_status)
        .bind(&employee.designation)
        .bind(employee.department_id.map(|d| d.to_string()))
        .bind(employee.salary)
        .bind(employee.created_at.timestamp())
        .bind(employee.updated_at.timestamp())
        .execute(&mut **tx)
        .await?;
        Ok(())
    }

    /// Writes the fields the update operation may change. Runs in the same
    /// transaction as the linked user's name update.
    pub async fn update_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
        employee: &Employee,
    ) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE employees
                SET marital_status = ?, designation = ?, department_id = ?,
                    salary = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&employee.marital_status)
        .bind(&employee.designation)
        .bind(employee.department_id.map(|d| d.to_string()))
        .bind(employee.salary)
        .bind(employee.updated_at.timestamp())
        .bind(employee.id.to_string())
        .execute(&mut **tx)
        .await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Employee>> {
        let sql = format!("{} WHERE id = ?", SELECT_EMPLOYEE);
        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| map_employee(&r)).transpose()
    }

    pub async fn find_by_user_id(&self, user_id: Uuid) -> DbErrorResult<Option<Employee>> {
        let sql = format!("{} WHERE user_id = ?", SELECT_EMPLOYEE);
        let row = sqlx::query(&sql)
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| map_employee(&r)).transpose()
    }

    pub async fn profile_by_employee_id(&self, id: Uuid) -> DbErrorResult<Option<EmployeeProfile>> {
        let sql = format!(
            "SELECT {} {} WHERE e.id = ?",
            PROFILE_COLUMNS, PROFILE_JOINS
        );
        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| map_profile(&r)).transpose()
    }

    pub async fn profile_by_user_id(&self, user_id: Uuid) -> DbErrorResult<Option<EmployeeProfile>> {
        let sql = format!(
            "SELECT {} {} WHERE e.user_id = ?",
            PROFILE_COLUMNS, PROFILE_JOINS
        );
        let row = sqlx::query(&sql)
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| map_profile(&r)).transpose()
    }

    pub async fn list_profiles(&self) -> DbErrorResult<Vec<EmployeeProfile>> {
        let sql = format!(
            "SELECT {} {} ORDER BY u.name",
            PROFILE_COLUMNS, PROFILE_JOINS
        );
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        rows.iter().map(map_profile).collect()
    }

    pub async fn list_profiles_by_department(
        &self,
        department_id: Uuid,
    ) -> DbErrorResult<Vec<EmployeeProfile>> {
        let sql = format!(
            "SELECT {} {} WHERE e.department_id = ? ORDER BY u.name",
            PROFILE_COLUMNS, PROFILE_JOINS
        );
        let rows = sqlx::query(&sql)
            .bind(department_id.to_string())
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(map_profile).collect()
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    pub async fn total_salary(&self) -> DbErrorResult<f64> {
        let total = sqlx::query_scalar::<_, f64>("SELECT COALESCE(SUM(salary), 0.0) FROM employees")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }
}

fn map_employee(row: &SqliteRow) -> DbErrorResult<Employee> {
    let id: String = row.try_get("id")?;
    let user_id: String = row.try_get("user_id")?;
    let dob: Option<String> = row.try_get("dob")?;
    let department_id: Option<String> = row.try_get("department_id")?;

    Ok(Employee {
        id: parse_uuid(&id, "employees.id")?,
        user_id: parse_uuid(&user_id, "employees.user_id")?,
        employee_id: row.try_get("employee_id")?,
        dob: dob
            .as_deref()
            .map(|d| parse_date(d, "employees.dob"))
            .transpose()?,
        gender: row.try_get("gender")?,
        marital_status: row.try_get("marital_status")?,
        designation: row.try_get("designation")?,
        department_id: department_id
            .as_deref()
            .map(|d| parse_uuid(d, "employees.department_id"))
            .transpose()?,
        salary: row.try_get("salary")?,
        created_at: parse_timestamp(row.try_get("created_at")?, "employees.created_at")?,
        updated_at: parse_timestamp(row.try_get("updated_at")?, "employees.updated_at")?,
    })
}

pub(crate) fn map_profile(row: &SqliteRow) -> DbErrorResult<EmployeeProfile> {
    let employee_pk: String = row.try_get("employee_pk")?;
    let user_id: String = row.try_get("user_id")?;
    let dob: Option<String> = row.try_get("dob")?;
    let department_id: Option<String> = row.try_get("department_id")?;
    let role: String = row.try_get("user_role")?;

    let employee = Employee {
        id: parse_uuid(&employee_pk, "employees.id")?,
        user_id: parse_uuid(&user_id, "employees.user_id")?,
        employee_id: row.try_get("employee_id")?,
        dob: dob
            .as_deref()
            .map(|d| parse_date(d, "employees.dob"))
            .transpose()?,
        gender: row.try_get("gender")?,
        marital_status: row.try_get("marital_status")?,
        designation: row.try_get("designation")?,
        department_id: department_id
            .as_deref()
            .map(|d| parse_uuid(d, "employees.department_id"))
            .transpose()?,
        salary: row.try_get("salary")?,
        created_at: parse_timestamp(row.try_get("employee_created_at")?, "employees.created_at")?,
        updated_at: parse_timestamp(row.try_get("employee_updated_at")?, "employees.updated_at")?,
    };

    // The view never carries the credential hash.
    let user = User {
        id: employee.user_id,
        name: row.try_get("user_name")?,
        email: row.try_get("user_email")?,
        password_hash: String::new(),
        role: parse_variant(&role, "users.role")?,
        profile_image: row.try_get("profile_image")?,
        created_at: parse_timestamp(row.try_get("user_created_at")?, "users.created_at")?,
        updated_at: parse_timestamp(row.try_get("user_updated_at")?, "users.updated_at")?,
    };

    let department_name: Option<String> = row.try_get("department_name")?;
    let department = match (employee.department_id, department_name) {
        (Some(dep_id), Some(name)) => {
            let created: Option<i64> = row.try_get("department_created_at")?;
            let updated: Option<i64> = row.try_get("department_updated_at")?;
            Some(Department {
                id: dep_id,
                name,
                description: row.try_get("department_description")?,
                created_at: parse_timestamp(
                    created.unwrap_or_default(),
                    "departments.created_at",
                )?,
                updated_at: parse_timestamp(
                    updated.unwrap_or_default(),
                    "departments.updated_at",
                )?,
            })
        }
        _ => None,
    };

    Ok(EmployeeProfile {
        employee,
        user,
        department,
    })
}
