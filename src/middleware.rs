//! Server-side logging of classified errors, and classification of responses produced outside the handlers.

use crate::error::{ApiError, AppError, ErrorCause};
use axum::{
    extract::Request,
    http::{header, Method, StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Logs the internal cause attached by [`ApiError`] responses. The client body stays generic.
pub async fn log_errors(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let response = next.run(request).await;
    if let Some(ErrorCause(cause)) = response.extensions().get::<ErrorCause>() {
        let status = response.status();
        if status.is_server_error() {
            tracing::error!(%method, %uri, status = status.as_u16(), cause = %cause, "request failed");
        } else {
            tracing::warn!(%method, %uri, status = status.as_u16(), cause = %cause, "request rejected");
        }
    }
    response
}

/// Rewrites the router's bare 405 and the body limit layer's plain-text 413 into classified error responses.
pub async fn classify_bare_errors(method: Method, uri: Uri, response: Response) -> Response {
    if response.extensions().get::<ErrorCause>().is_some() {
        return response;
    }
    let target = format!("{} {}", method, uri.path());
    let cause = match response.status() {
        StatusCode::METHOD_NOT_ALLOWED => AppError::MethodNotAllowed(target),
        StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(target),
        _ => return response,
    };
    let allow = response.headers().get(header::ALLOW).cloned();
    let mut classified = ApiError::from(cause).into_response();
    if let Some(allow) = allow {
        classified.headers_mut().insert(header::ALLOW, allow);
    }
    classified
}
