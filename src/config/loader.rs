//! Load [`AppConfig`] from environment variables.

use crate::config::types::{AppConfig, DEFAULT_BIND, DEFAULT_BODY_LIMIT, DEFAULT_MAX_CONNECTIONS};
use crate::error::ConfigError;
use crate::logging::LogLevel;
use std::net::SocketAddr;
use std::str::FromStr;

pub const DATABASE_URL_VAR: &str = "POSTGRESQL_URL";
pub const DATABASE_URL_FALLBACK_VAR: &str = "DATABASE_URL";
pub const BIND_VAR: &str = "BLOG_API_BIND";
pub const MAX_CONNECTIONS_VAR: &str = "BLOG_API_MAX_CONNECTIONS";
pub const LOG_LEVEL_VAR: &str = "BLOG_API_LOG_LEVEL";
pub const BODY_LIMIT_VAR: &str = "BLOG_API_BODY_LIMIT";
pub const CREATE_DATABASE_VAR: &str = "BLOG_API_CREATE_DATABASE";

impl AppConfig {
    /// Read config from the process environment. A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = get(DATABASE_URL_VAR)
            .or_else(|| get(DATABASE_URL_FALLBACK_VAR))
            .ok_or(ConfigError::Missing(DATABASE_URL_VAR))?;
        let bind: SocketAddr = parse_or(get(BIND_VAR), BIND_VAR, DEFAULT_BIND.parse().ok())?;
        let max_connections = parse_or(get(MAX_CONNECTIONS_VAR), MAX_CONNECTIONS_VAR, Some(DEFAULT_MAX_CONNECTIONS))?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: MAX_CONNECTIONS_VAR,
                value: "0".into(),
            });
        }
        let log_level = parse_or(get(LOG_LEVEL_VAR), LOG_LEVEL_VAR, Some(LogLevel::Info))?;
        let body_limit = parse_or(get(BODY_LIMIT_VAR), BODY_LIMIT_VAR, Some(DEFAULT_BODY_LIMIT))?;
        let create_database = match get(CREATE_DATABASE_VAR) {
            None => false,
            Some(v) => parse_flag(&v).ok_or(ConfigError::Invalid {
                key: CREATE_DATABASE_VAR,
                value: v,
            })?,
        };

        Ok(AppConfig {
            database_url,
            bind,
            max_connections,
            log_level,
            body_limit,
            create_database,
        })
    }
}

fn parse_or<T: FromStr>(raw: Option<String>, key: &'static str, default: Option<T>) -> Result<T, ConfigError> {
    match raw {
        Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid { key, value: v }),
        None => default.ok_or(ConfigError::Missing(key)),
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
