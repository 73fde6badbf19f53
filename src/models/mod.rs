//! Domain model.

mod blog;

pub use blog::{Blog, BlogDraft, WordCount};
