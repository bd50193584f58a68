// Public API - what other modules can use
pub use handlers::{create_daily_goal, delete_daily_goal, list_daily_goals, update_daily_goal};

// Internal modules
mod handlers;
pub mod models;
pub mod repository;
pub mod types;
