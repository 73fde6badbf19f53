//! Shared, read-only dependencies handed to constructors.

use crate::config::AppConfig;
use std::sync::Arc;

/// Built once at startup and cloned by reference count. Holds no connection; the pool belongs to the repository.
#[derive(Clone, Debug)]
pub struct Container {
    config: Arc<AppConfig>,
}

impl Container {
    pub fn new(config: AppConfig) -> Self {
        tracing::info!(bind = %config.bind, log_level = %config.log_level, "blog api container ready");
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
