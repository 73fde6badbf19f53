//! HTTP handlers.

pub mod blog;
