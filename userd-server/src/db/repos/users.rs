//! User repository over PostgreSQL.
//!
//! Writes are single statements, so each is atomic on its own; uniqueness
//! violations come back from the database rather than check-then-insert.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use userd_core::store::{Result, StoreError, UserStore};
use userd_core::User;

/// PostgreSQL-backed user store.
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Maps a sqlx error to the store taxonomy.
///
/// Unique-constraint violations are an expected business outcome; every
/// other database error counts as infrastructure unavailability.
fn map_sqlx_error(e: sqlx::Error) -> StoreError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::DuplicateUser,
        _ => StoreError::Unavailable(e.to_string()),
    }
}

fn row_to_user(row: &sqlx::postgres::PgRow) -> User {
    User {
        id: row.get("id"),
        username: row.get("username"),
        email: row.get("email"),
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert(&self, username: &str, email: &str) -> Result<User> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (username, email)
            VALUES ($1, $2)
            RETURNING id, username, email
            "#,
        )
        .bind(username)
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row_to_user(&row))
    }

    async fn list_all(&self) -> Result<Vec<User>> {
        let rows = sqlx::query("SELECT id, username, email FROM users")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.iter().map(row_to_user).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<User> {
        let row = sqlx::query("SELECT id, username, email FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or(StoreError::NotFound { id })?;

        Ok(row_to_user(&row))
    }

    async fn update(&self, id: i64, username: Option<&str>, email: Option<&str>) -> Result<User> {
        // COALESCE keeps a column unchanged when its parameter is NULL.
        let row = sqlx::query(
            r#"
            UPDATE users
            SET username = COALESCE($2, username),
                email = COALESCE($3, email)
            WHERE id = $1
            RETURNING id, username, email
            "#,
        )
        .bind(id)
        .bind(username)
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(StoreError::NotFound { id })?;

        Ok(row_to_user(&row))
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { id });
        }

        Ok(())
    }
}
