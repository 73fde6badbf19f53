//! PostgreSQL-backed blog repository.

use super::{BlogCreator, BlogDeleter, BlogUpdater, MultiBlogGetter, SingleBlogGetter, StoreHealth};
use crate::error::AppError;
use crate::migration::BLOGS_TABLE;
use crate::models::{Blog, BlogDraft};
use async_trait::async_trait;
use sqlx::PgPool;

const COLUMNS: &str = "id, title, body, created_at, updated_at, deleted_at";

#[derive(Clone)]
pub struct PgBlogRepository {
    pool: PgPool,
}

impl PgBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl BlogCreator for PgBlogRepository {
    async fn create(&self, draft: BlogDraft) -> Result<Blog, AppError> {
        let sql = format!("INSERT INTO {BLOGS_TABLE} (title, body) VALUES ($1, $2) RETURNING {COLUMNS}");
        tracing::debug!(sql = %sql, "query");
        let blog = sqlx::query_as::<_, Blog>(&sql)
            .bind(&draft.title)
            .bind(&draft.body)
            .fetch_one(&self.pool)
            .await?;
        Ok(blog)
    }
}

#[async_trait]
impl SingleBlogGetter for PgBlogRepository {
    async fn get_by_id(&self, id: i64) -> Result<Blog, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM {BLOGS_TABLE} WHERE id = $1 AND deleted_at IS NULL");
        tracing::debug!(sql = %sql, id, "query");
        let blog = sqlx::query_as::<_, Blog>(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(blog)
    }
}

#[async_trait]
impl MultiBlogGetter for PgBlogRepository {
    async fn get_all(&self) -> Result<Vec<Blog>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM {BLOGS_TABLE} WHERE deleted_at IS NULL ORDER BY id");
        tracing::debug!(sql = %sql, "query");
        let blogs = sqlx::query_as::<_, Blog>(&sql).fetch_all(&self.pool).await?;
        Ok(blogs)
    }
}

#[async_trait]
impl BlogUpdater for PgBlogRepository {
    async fn update(&self, id: i64, draft: BlogDraft) -> Result<Blog, AppError> {
        let sql = format!(
            "UPDATE {BLOGS_TABLE} SET title = $2, body = $3, updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING {COLUMNS}"
        );
        tracing::debug!(sql = %sql, id, "query");
        let blog = sqlx::query_as::<_, Blog>(&sql)
            .bind(id)
            .bind(&draft.title)
            .bind(&draft.body)
            .fetch_one(&self.pool)
            .await?;
        Ok(blog)
    }
}

#[async_trait]
impl BlogDeleter for PgBlogRepository {
    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let sql = format!("UPDATE {BLOGS_TABLE} SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL");
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            tracing::debug!(id, "delete matched no live row");
        }
        Ok(())
    }
}

#[async_trait]
impl StoreHealth for PgBlogRepository {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
