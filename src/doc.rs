//! OpenAPI document for the blog routes, served at `/openapi.json`.

use crate::dto::{CreateBlogRequest, UpdateBlogRequest};
use crate::error::ErrorBody;
use crate::models::Blog;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blog API",
        description = "CRUD over blog posts with soft delete and per-post word counts."
    ),
    paths(
        crate::handlers::blog::index,
        crate::handlers::blog::new,
        crate::handlers::blog::show,
        crate::handlers::blog::show_word_count,
        crate::handlers::blog::create,
        crate::handlers::blog::update,
        crate::handlers::blog::delete,
    ),
    components(schemas(Blog, CreateBlogRequest, UpdateBlogRequest, ErrorBody)),
    tags((name = "blogs", description = "Blog posts"))
)]
pub struct ApiDoc;
