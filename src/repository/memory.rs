//! In-process blog store with the same observable behaviour as the PostgreSQL one.

use super::{BlogCreator, BlogDeleter, BlogUpdater, MultiBlogGetter, SingleBlogGetter, StoreHealth};
use crate::error::AppError;
use crate::models::{Blog, BlogDraft};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Table {
    last_id: i64,
    rows: BTreeMap<i64, Blog>,
}

impl Table {
    fn live(&self, id: i64) -> Option<&Blog> {
        self.rows.get(&id).filter(|b| b.deleted_at.is_none())
    }

    fn live_mut(&mut self, id: i64) -> Option<&mut Blog> {
        self.rows.get_mut(&id).filter(|b| b.deleted_at.is_none())
    }
}

/// Ids start at 1 and are never reused. Deleted rows stay in the table with `deleted_at` set.
#[derive(Default)]
pub struct MemoryBlogRepository {
    table: RwLock<Table>,
}

impl MemoryBlogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows including soft-deleted ones.
    pub async fn len_with_deleted(&self) -> usize {
        self.table.read().await.rows.len()
    }
}

#[async_trait]
impl BlogCreator for MemoryBlogRepository {
    async fn create(&self, draft: BlogDraft) -> Result<Blog, AppError> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let now = Utc::now();
        let blog = Blog {
            id: table.last_id,
            title: draft.title,
            body: draft.body,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        table.rows.insert(blog.id, blog.clone());
        Ok(blog)
    }
}

#[async_trait]
impl SingleBlogGetter for MemoryBlogRepository {
    async fn get_by_id(&self, id: i64) -> Result<Blog, AppError> {
        let table = self.table.read().await;
        table.live(id).cloned().ok_or(AppError::Db(sqlx::Error::RowNotFound))
    }
}

#[async_trait]
impl MultiBlogGetter for MemoryBlogRepository {
    async fn get_all(&self) -> Result<Vec<Blog>, AppError> {
        let table = self.table.read().await;
        Ok(table.rows.values().filter(|b| b.deleted_at.is_none()).cloned().collect())
    }
}

#[async_trait]
impl BlogUpdater for MemoryBlogRepository {
    async fn update(&self, id: i64, draft: BlogDraft) -> Result<Blog, AppError> {
        let mut table = self.table.write().await;
        let blog = table.live_mut(id).ok_or(AppError::Db(sqlx::Error::RowNotFound))?;
        blog.title = draft.title;
        blog.body = draft.body;
        blog.updated_at = Utc::now();
        Ok(blog.clone())
    }
}

#[async_trait]
impl BlogDeleter for MemoryBlogRepository {
    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut table = self.table.write().await;
        if let Some(blog) = table.live_mut(id) {
            blog.deleted_at = Some(Utc::now());
        }
        Ok(())
    }
}

#[async_trait]
impl StoreHealth for MemoryBlogRepository {
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
