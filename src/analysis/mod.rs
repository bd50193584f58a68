// Public API - what other modules can use
pub use handlers::{create_analysis, get_analysis, list_analyses};

// Internal modules
mod handlers;
pub mod models;
pub mod repository;
pub mod types;
