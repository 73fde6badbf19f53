//! Runtime configuration values.

use crate::logging::LogLevel;
use std::net::SocketAddr;

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
/// 1 MiB.
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// PostgreSQL connection string.
    pub database_url: String,
    pub bind: SocketAddr,
    pub max_connections: u32,
    pub log_level: LogLevel,
    /// Maximum accepted request body, in bytes.
    pub body_limit: usize,
    /// Create the target database on startup when it does not exist yet.
    pub create_database: bool,
}

impl AppConfig {
    /// Config pointing at `database_url` with every other value at its default.
    pub fn with_database_url(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            bind: SocketAddr::from(([0, 0, 0, 0], 8080)),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            log_level: LogLevel::Info,
            body_limit: DEFAULT_BODY_LIMIT,
            create_database: false,
        }
    }
}
