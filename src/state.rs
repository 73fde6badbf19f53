//! Shared application state for all routes.

use crate::container::Container;
use crate::repository::{BlogRepository, StoreHealth};
use crate::service::BlogService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub container: Container,
    pub service: Arc<BlogService>,
    pub repository: Arc<dyn BlogRepository>,
    /// Same store as `repository`, probed by the readiness route.
    pub store_health: Arc<dyn StoreHealth>,
}

impl AppState {
    pub fn new<R>(container: Container, repository: Arc<R>) -> Self
    where
        R: BlogRepository + StoreHealth + 'static,
    {
        let service = Arc::new(BlogService::new(&container));
        Self {
            container,
            service,
            repository: repository.clone(),
            store_health: repository,
        }
    }
}
