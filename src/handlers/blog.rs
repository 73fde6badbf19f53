//! Blog controller: index, new, show, word count, create, update, delete.

use crate::dto::{CreateBlogRequest, UpdateBlogRequest};
use crate::error::{ApiError, AppError, ErrorBody};
use crate::models::{Blog, WordCount};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

fn bind_json<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload.map(|Json(v)| v).map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(rejection.body_text())
        } else {
            AppError::Binding(rejection.body_text())
        }
    })
}

fn bind_id(id: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    id.map(|Path(id)| id)
        .map_err(|rejection| AppError::Binding(rejection.body_text()))
}

/// List all blogs.
#[utoipa::path(
    get,
    path = "/blogs/",
    responses(
        (status = 200, description = "Every blog that is not deleted", body = [Blog]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["blogs"]
)]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Blog>>, ApiError> {
    let blogs = state.service.get_all(&*state.repository).await?;
    Ok(Json(blogs))
}

/// Reserved for a creation form; always 501.
#[utoipa::path(
    get,
    path = "/blogs/new",
    responses((status = 501, description = "Not implemented", body = ErrorBody)),
    tags = ["blogs"]
)]
pub async fn new() -> ApiError {
    ApiError::from(AppError::NotImplemented)
}

/// Fetch one blog. Non-numeric ids fall through to the not-found fallback.
#[utoipa::path(
    get,
    path = "/blogs/{id}",
    params(("id" = i64, Path, description = "Blog id")),
    responses(
        (status = 200, description = "The blog", body = Blog),
        (status = 404, description = "No such blog", body = ErrorBody)
    ),
    tags = ["blogs"]
)]
pub async fn show(State(state): State<AppState>, Path(segment): Path<String>) -> Response {
    let Ok(id) = segment.parse::<i64>() else {
        return ApiError::from(AppError::NoRoute(format!("/blogs/{}", segment))).into_response();
    };
    match state.service.get_by_id(id, &*state.repository).await {
        Ok(blog) => Json(blog).into_response(),
        Err(err) => ApiError::from(err).into_response(),
    }
}

/// Word frequencies of a blog's body.
#[utoipa::path(
    get,
    path = "/blogs/{id}/words",
    params(("id" = i64, Path, description = "Blog id")),
    responses(
        (status = 200, description = "JSON object mapping each word to its occurrence count"),
        (status = 400, description = "Id is not an integer", body = ErrorBody),
        (status = 404, description = "No such blog", body = ErrorBody)
    ),
    tags = ["blogs"]
)]
pub async fn show_word_count(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<WordCount>, ApiError> {
    let id = bind_id(id)?;
    let blog = state.service.get_by_id(id, &*state.repository).await?;
    Ok(Json(blog.word_count()))
}

/// Create a blog.
#[utoipa::path(
    post,
    path = "/blogs/",
    request_body = CreateBlogRequest,
    responses(
        (status = 200, description = "The created blog", body = Blog),
        (status = 400, description = "Missing or empty title/body", body = ErrorBody),
        (status = 409, description = "Duplicate key", body = ErrorBody),
        (status = 413, description = "Request body over the configured limit", body = ErrorBody)
    ),
    tags = ["blogs"]
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateBlogRequest>, JsonRejection>,
) -> Result<Json<Blog>, ApiError> {
    let request = bind_json(payload)?;
    request.validate()?;
    let blog = state.service.create(request, &*state.repository).await?;
    Ok(Json(blog))
}

/// Replace title and body of a blog.
#[utoipa::path(
    put,
    path = "/blogs/{id}",
    params(("id" = i64, Path, description = "Blog id")),
    request_body = UpdateBlogRequest,
    responses(
        (status = 200, description = "The updated blog", body = Blog),
        (status = 400, description = "Bad id or missing title/body", body = ErrorBody),
        (status = 404, description = "No such blog", body = ErrorBody)
    ),
    tags = ["blogs"]
)]
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateBlogRequest>, JsonRejection>,
) -> Result<Json<Blog>, ApiError> {
    let id = bind_id(id)?;
    let request = bind_json(payload)?;
    request.validate()?;
    let blog = state.service.update(id, request, &*state.repository).await?;
    Ok(Json(blog))
}

/// Soft-delete a blog.
#[utoipa::path(
    delete,
    path = "/blogs/{id}",
    params(("id" = i64, Path, description = "Blog id")),
    responses(
        (status = 204, description = "Deleted, or nothing to delete"),
        (status = 400, description = "Id is not an integer", body = ErrorBody)
    ),
    tags = ["blogs"]
)]
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = bind_id(id)?;
    state.service.delete(id, &*state.repository).await?;
    Ok(StatusCode::NO_CONTENT)
}
