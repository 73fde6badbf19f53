//! Router assembly.

mod blog;
mod common;

pub use blog::blog_routes;
pub use common::common_routes;

use crate::error::{ApiError, AppError};
use crate::middleware::{classify_bare_errors, log_errors};
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, http::Uri, middleware, Router};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// 404 for every path no route claims.
pub async fn fallback(uri: Uri) -> ApiError {
    ApiError::from(AppError::NoRoute(uri.path().to_string()))
}

/// Full application: blog and common routes, not-found fallback, body limit, error logging, request tracing.
///
/// The configured body limit replaces axum's extractor default, and its 413 goes through the classifier.
pub fn app(state: AppState) -> Router {
    let body_limit = state.container.config().body_limit;
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(blog_routes(state))
        .fallback(fallback)
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(DefaultBodyLimit::disable())
        .layer(middleware::map_response(classify_bare_errors))
        .layer(middleware::from_fn(log_errors))
        .layer(TraceLayer::new_for_http())
}
