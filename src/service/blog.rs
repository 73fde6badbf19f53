//! BlogService: maps request payloads onto drafts and forwards to the repository.

use crate::container::Container;
use crate::dto::{CreateBlogRequest, UpdateBlogRequest};
use crate::error::AppError;
use crate::models::{Blog, BlogDraft};
use crate::repository::{BlogCreator, BlogDeleter, BlogUpdater, MultiBlogGetter, SingleBlogGetter};

/// Stateless; each method takes the one repository capability it needs and returns store errors untouched.
#[derive(Clone, Debug, Default)]
pub struct BlogService;

impl BlogService {
    pub fn new(container: &Container) -> Self {
        tracing::debug!(log_level = %container.config().log_level, "blog service ready");
        Self
    }

    pub async fn create<R>(&self, request: CreateBlogRequest, repo: &R) -> Result<Blog, AppError>
    where
        R: BlogCreator + ?Sized,
    {
        let draft = BlogDraft::from(request);
        tracing::debug!(title = %draft.title, "create blog");
        repo.create(draft).await
    }

    pub async fn get_by_id<R>(&self, id: i64, repo: &R) -> Result<Blog, AppError>
    where
        R: SingleBlogGetter + ?Sized,
    {
        tracing::debug!(id, "get blog");
        repo.get_by_id(id).await
    }

    pub async fn get_all<R>(&self, repo: &R) -> Result<Vec<Blog>, AppError>
    where
        R: MultiBlogGetter + ?Sized,
    {
        repo.get_all().await
    }

    /// Replaces title and body; nothing from the stored row is merged in.
    pub async fn update<R>(&self, id: i64, request: UpdateBlogRequest, repo: &R) -> Result<Blog, AppError>
    where
        R: BlogUpdater + ?Sized,
    {
        let draft = BlogDraft::from(request);
        tracing::debug!(id, title = %draft.title, "update blog");
        repo.update(id, draft).await
    }

    pub async fn delete<R>(&self, id: i64, repo: &R) -> Result<(), AppError>
    where
        R: BlogDeleter + ?Sized,
    {
        tracing::debug!(id, "delete blog");
        repo.delete(id).await
    }
}
