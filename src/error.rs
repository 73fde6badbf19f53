//! Typed errors and their classification into HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use utoipa::ToSchema;

/// SQLSTATE for `unique_violation`.
pub const PG_UNIQUE_VIOLATION: &str = "23505";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Request data could not be bound to the expected shape.
    #[error("binding: {0}")]
    Binding(String),
    #[error("no route for {0}")]
    NoRoute(String),
    #[error("method not allowed: {0}")]
    MethodNotAllowed(String),
    #[error("request body too large: {0}")]
    PayloadTooLarge(String),
    #[error("action is not implemented")]
    NotImplemented,
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

/// One classification rule: when `matches` holds for an error, respond with `status`.
struct Rule {
    matches: fn(&AppError) -> bool,
    status: StatusCode,
}

/// Evaluated top to bottom; the first match wins. Unmatched errors are 500.
const RULES: &[Rule] = &[
    Rule {
        matches: is_binding_failure,
        status: StatusCode::BAD_REQUEST,
    },
    Rule {
        matches: is_not_found,
        status: StatusCode::NOT_FOUND,
    },
    Rule {
        matches: is_method_not_allowed,
        status: StatusCode::METHOD_NOT_ALLOWED,
    },
    Rule {
        matches: is_payload_too_large,
        status: StatusCode::PAYLOAD_TOO_LARGE,
    },
    Rule {
        matches: is_duplicate_key,
        status: StatusCode::CONFLICT,
    },
    Rule {
        matches: is_not_implemented,
        status: StatusCode::NOT_IMPLEMENTED,
    },
];

fn is_binding_failure(err: &AppError) -> bool {
    matches!(err, AppError::Binding(_))
}

fn is_not_found(err: &AppError) -> bool {
    matches!(err, AppError::Db(sqlx::Error::RowNotFound) | AppError::NoRoute(_))
}

fn is_method_not_allowed(err: &AppError) -> bool {
    matches!(err, AppError::MethodNotAllowed(_))
}

fn is_payload_too_large(err: &AppError) -> bool {
    matches!(err, AppError::PayloadTooLarge(_))
}

fn is_duplicate_key(err: &AppError) -> bool {
    match err {
        AppError::Db(sqlx::Error::Database(db)) => db.code().as_deref() == Some(PG_UNIQUE_VIOLATION),
        _ => false,
    }
}

fn is_not_implemented(err: &AppError) -> bool {
    matches!(err, AppError::NotImplemented)
}

/// A classified failure: the status and sanitized message sent to the client, and the cause kept for the server log.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    cause: AppError,
}

impl ApiError {
    pub fn classify(cause: AppError) -> Self {
        let status = RULES
            .iter()
            .find(|rule| (rule.matches)(&cause))
            .map(|rule| rule.status)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self { status, cause }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Canonical reason phrase for the status. Never contains error text.
    pub fn message(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or("Internal Server Error")
    }

    pub fn cause(&self) -> &AppError {
        &self.cause
    }

    pub fn into_cause(self) -> AppError {
        self.cause
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError::classify(err)
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::classify(AppError::Db(err))
    }
}

/// Client-facing error body.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct ErrorBody {
    /// HTTP status code.
    pub code: u16,
    /// Reason phrase for `code`.
    pub message: String,
}

/// Internal cause of an error response, attached as a response extension for the error logging middleware.
#[derive(Clone, Debug)]
pub struct ErrorCause(pub Arc<str>);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            code: self.status.as_u16(),
            message: self.message().to_string(),
        };
        let mut response = (self.status, Json(body)).into_response();
        response
            .extensions_mut()
            .insert(ErrorCause(Arc::from(self.cause.to_string())));
        response
    }
}
