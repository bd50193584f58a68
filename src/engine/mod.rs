// Public API - what other modules can use
pub use analyzer::{MockAnalyzer, PositionAnalysis, PositionAnalyzer};
pub use classify::{classify_move, MoveClassification, MoveVerdict};
pub use handlers::analyze_position;

// Internal modules
mod analyzer;
mod classify;
mod handlers;
pub mod types;

use serde::{Deserialize, Serialize};

/// Engine build a user prefers for analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EngineKind {
    #[default]
    #[serde(rename = "stockfish17")]
    Stockfish17,
    #[serde(rename = "stockfish17lite")]
    Stockfish17Lite,
}
