//! Blog resource routes. Collection paths keep the trailing slash.
//! The literal `/blogs/new` is matched before the `/blogs/:id` parameter.

use crate::handlers::blog::{create, delete, index, new, show, show_word_count, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn blog_routes(state: AppState) -> Router {
    Router::new()
        .route("/blogs/", get(index).post(create))
        .route("/blogs/new", get(new))
        .route("/blogs/:id", get(show).put(update).delete(delete))
        .route("/blogs/:id/words", get(show_word_count))
        .with_state(state)
}
