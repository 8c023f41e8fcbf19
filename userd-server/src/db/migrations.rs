//! Schema bootstrap for the users table.
//!
//! Idempotent DDL run at startup; this is not a migration framework.

use sqlx::PgPool;

/// Create the users table if it does not exist.
///
/// Uniqueness of username and email is enforced here; the repository maps
/// violations to `StoreError::DuplicateUser`.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running schema bootstrap...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            username VARCHAR(80) UNIQUE NOT NULL,
            email VARCHAR(120) UNIQUE NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Schema bootstrap complete");
    Ok(())
}
