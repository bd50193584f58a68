use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::shared::AppError;

/// Engine evaluation of a single position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionAnalysis {
    /// Evaluation in pawns from white's point of view
    pub evaluation: f64,
    pub best_move: String,
    pub principal_variation: Vec<String>,
    pub depth: u32,
}

#[async_trait]
pub trait PositionAnalyzer: Send + Sync {
    async fn analyze(&self, fen: &str, depth: u32) -> Result<PositionAnalysis, AppError>;
}

/// Stand-in analyzer that answers every position with the same line.
///
/// No rules engine is bundled; a real one plugs in behind `PositionAnalyzer`.
#[derive(Debug, Default)]
pub struct MockAnalyzer;

impl MockAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PositionAnalyzer for MockAnalyzer {
    #[instrument(skip(self))]
    async fn analyze(&self, fen: &str, depth: u32) -> Result<PositionAnalysis, AppError> {
        debug!(fen = %fen, depth, "Producing mock analysis");

        Ok(PositionAnalysis {
            evaluation: 0.4,
            best_move: "Nf3".to_string(),
            principal_variation: ["Nf3", "d5", "d4", "Nf6"]
                .iter()
                .map(|m| m.to_string())
                .collect(),
            depth,
        })
    }
}
