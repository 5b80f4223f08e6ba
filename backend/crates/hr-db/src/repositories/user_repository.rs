//! User repository - credential store access.

use crate::Result as DbErrorResult;
use crate::repositories::row::{parse_timestamp, parse_uuid, parse_variant};

use hr_core::User;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const INSERT_USER: &str = r#"
    INSERT INTO users (
        id, name, email, password_hash, role, profile_image,
        created_at, updated_at
    ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
"#;

const SELECT_USER: &str = r#"
    SELECT id, name, email, password_hash, role, profile_image,
        created_at, updated_at
    FROM users
"#;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        bind_user(sqlx::query(INSERT_USER), user)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Transactional insert, paired with the employee insert so a failed
    /// employee write cannot leave an orphan user behind.
    pub async fn insert_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
        user: &User,
    ) -> DbErrorResult<()> {
        bind_user(sqlx::query(INSERT_USER), user)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let sql = format!("{} WHERE id = ?", SELECT_USER);
        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| map_user(&r)).transpose()
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let sql = format!("{} WHERE email = ?", SELECT_USER);
        let row = sqlx::query(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| map_user(&r)).transpose()
    }

    pub async fn update_name_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
        id: Uuid,
        name: &str,
        updated_at: i64,
    ) -> DbErrorResult<()> {
        sqlx::query("UPDATE users SET name = ?, updated_at = ? WHERE id = ?")
            .bind(name)
            .bind(updated_at)
            .bind(id.to_string())
            .execute(&mut **tx)
            .await?;
        Ok(())
    }

    /// Returns the number of rows touched so callers can 404 a stale id.
    pub async fn update_password(
        &self,
        id: Uuid,
        password_hash: &str,
        updated_at: i64,
    ) -> DbErrorResult<u64> {
        let result = sqlx::query("UPDATE users SET password_hash = ?, updated_at = ? WHERE id = ?")
            .bind(password_hash)
            .bind(updated_at)
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

fn bind_user<'q>(
    query: sqlx::query::Query<'q, sqlx::Sqlite, sqlx::sqlite::SqliteArguments<'q>>,
    user: &'q User,
) -> sqlx::query::Query<'q, sqlx::Sqlite, sqlx::sqlite::SqliteArguments<'q>> {
    query
        .bind(user.id.to_string())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(&user.profile_image)
        .bind(user.created_at.timestamp())
        .bind(user.updated_at.timestamp())
}

fn map_user(row: &SqliteRow) -> DbErrorResult<User> {
    let id: String = row.try_get("id")?;
    let role: String = row.try_get("role")?;

    Ok(User {
        id: parse_uuid(&id, "users.id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        role: parse_variant(&role, "users.role")?,
        profile_image: row.try_get("profile_image")?,
        created_at: parse_timestamp(row.try_get("created_at")?, "users.created_at")?,
        updated_at: parse_timestamp(row.try_get("updated_at")?, "users.updated_at")?,
    })
}
