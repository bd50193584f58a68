// Public API - what other modules can use
pub use handlers::{create_goal, delete_goal, list_goals, update_goal};

// Internal modules
mod handlers;
pub mod models;
pub mod repository;
pub mod types;
