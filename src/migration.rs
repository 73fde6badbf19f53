//! Schema setup for the `blogs` table. Every statement is idempotent so it runs on each startup.

use crate::error::AppError;
use sqlx::PgPool;

pub const BLOGS_TABLE: &str = "blogs";

const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS blogs (
        id BIGSERIAL PRIMARY KEY,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        deleted_at TIMESTAMPTZ,
        title TEXT NOT NULL,
        body TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_blogs_deleted_at ON blogs (deleted_at)",
];

/// Create the blogs table and its soft-delete index when missing.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    for sql in STATEMENTS {
        tracing::debug!(sql = %sql.trim(), "migration");
        sqlx::query(sql).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    tracing::info!(table = BLOGS_TABLE, "schema ready");
    Ok(())
}
