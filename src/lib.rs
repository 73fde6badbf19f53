//! Blog API: layered CRUD backend for blog posts over PostgreSQL.

pub mod config;
pub mod container;
pub mod db;
pub mod doc;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod migration;
pub mod models;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;

pub use config::AppConfig;
pub use container::Container;
pub use db::{connect, ensure_database_exists};
pub use error::{ApiError, AppError, ConfigError};
pub use logging::{init_logging, LogLevel};
pub use migration::apply_migrations;
pub use models::{Blog, BlogDraft, WordCount};
pub use repository::{BlogRepository, MemoryBlogRepository, PgBlogRepository};
pub use routes::app;
pub use service::BlogService;
pub use state::AppState;
