// Public API - what other modules can use
pub use handlers::{create_course, delete_course, list_courses, update_course};

// Internal modules
mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod types;
