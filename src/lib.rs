// Library crate for the chess progress tracker
// This file exposes the public API for integration tests

pub mod analysis;
pub mod config;
pub mod course;
pub mod daily_goal;
pub mod elo;
pub mod engine;
pub mod extract;
pub mod goal;
pub mod routes;
pub mod shared;
pub mod stats;
pub mod table;
pub mod user;

// Re-export commonly used types for easier access in tests
pub use config::ServerConfig;
pub use routes::app;
pub use shared::{AppError, AppState};
