//! Blog persistence, one trait per capability.
//!
//! Service methods take only the capability they use, so a test double for `create` implements [`BlogCreator`]
//! and nothing else. [`BlogRepository`] bundles all five and is implemented for any type that has them.
//! Errors are returned exactly as the store produced them; a missing row is `sqlx::Error::RowNotFound`.

mod memory;
mod postgres;

pub use memory::MemoryBlogRepository;
pub use postgres::PgBlogRepository;

use crate::error::AppError;
use crate::models::{Blog, BlogDraft};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogCreator: Send + Sync {
    /// Insert a new blog. The returned value carries the store-assigned id and timestamps.
    async fn create(&self, draft: BlogDraft) -> Result<Blog, AppError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SingleBlogGetter: Send + Sync {
    async fn get_by_id(&self, id: i64) -> Result<Blog, AppError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MultiBlogGetter: Send + Sync {
    /// Every blog that is not soft-deleted, ordered by id. Empty when there are none.
    async fn get_all(&self) -> Result<Vec<Blog>, AppError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogUpdater: Send + Sync {
    /// Replace title and body of a live blog. Fields are not merged with the stored row.
    async fn update(&self, id: i64, draft: BlogDraft) -> Result<Blog, AppError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogDeleter: Send + Sync {
    /// Soft delete. Unknown or already deleted ids are not an error.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

/// Liveness probe for the backing store, used by the readiness route.
#[async_trait]
pub trait StoreHealth: Send + Sync {
    async fn ping(&self) -> Result<(), AppError>;
}

pub trait BlogRepository: BlogCreator + SingleBlogGetter + MultiBlogGetter + BlogUpdater + BlogDeleter {}

impl<T> BlogRepository for T where T: BlogCreator + SingleBlogGetter + MultiBlogGetter + BlogUpdater + BlogDeleter {}
