//! Business layer between handlers and the repository.

mod blog;
pub use blog::BlogService;
