//! Read-side aggregation: rating windows, recent form and completion ratios.
//!
//! Everything here is recomputed from the store on each request.

// Public API - what other modules can use
pub use elo::{EloStats, RecentPerformance, RECENT_ENTRY_LIMIT};
pub use handlers::{get_elo_stats, get_progress, get_recent_performance};
pub use period::StatsPeriod;
pub use progress::{CompletionSummary, CourseProgress, LessonSummary, ProgressReport};
pub use service::StatsService;

// Internal modules
pub mod elo;
mod handlers;
pub mod period;
pub mod progress;
pub mod service;
