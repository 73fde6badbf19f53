//! Request payloads. Kept separate from [`Blog`](crate::models::Blog) so the wire contract can change without touching the table.

use crate::error::AppError;
use crate::models::BlogDraft;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct CreateBlogRequest {
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct UpdateBlogRequest {
    pub title: String,
    pub body: String,
}

/// Both fields must be present and non-empty. Whitespace counts as content.
fn require_fields(title: &str, body: &str) -> Result<(), AppError> {
    for (name, value) in [("title", title), ("body", body)] {
        if value.is_empty() {
            return Err(AppError::Binding(format!("{} is required", name)));
        }
    }
    Ok(())
}

impl CreateBlogRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        require_fields(&self.title, &self.body)
    }
}

impl UpdateBlogRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        require_fields(&self.title, &self.body)
    }
}

impl From<CreateBlogRequest> for BlogDraft {
    fn from(request: CreateBlogRequest) -> Self {
        BlogDraft {
            title: request.title,
            body: request.body,
        }
    }
}

impl From<UpdateBlogRequest> for BlogDraft {
    fn from(request: UpdateBlogRequest) -> Self {
        BlogDraft {
            title: request.title,
            body: request.body,
        }
    }
}
