use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use super::models::{AnalysisData, MoveEvaluation};
use crate::engine::{classify_move, MoveClassification};

/// A move as submitted; the classification may be left for the server to fill in
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedMove {
    #[serde(rename = "move")]
    #[validate(length(min = 1, message = "Move must not be empty"))]
    pub san: String,
    pub evaluation: f64,
    pub classification: Option<MoveClassification>,
    pub best_move: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmittedAnalysis {
    #[validate(nested)]
    pub moves: Vec<SubmittedMove>,
}

impl SubmittedAnalysis {
    /// Keeps given classifications and derives the missing ones from the
    /// evaluation swing against the previous move (0.0 before the first).
    pub fn classify(self) -> AnalysisData {
        let mut previous = 0.0;
        let moves = self
            .moves
            .into_iter()
            .map(|submitted| {
                let classification = submitted
                    .classification
                    .unwrap_or_else(|| classify_move(previous, submitted.evaluation).classification);
                previous = submitted.evaluation;
                MoveEvaluation {
                    san: submitted.san,
                    evaluation: submitted.evaluation,
                    classification,
                    best_move: submitted.best_move,
                }
            })
            .collect();

        AnalysisData { moves }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameAnalysisRequest {
    #[validate(range(min = 1, message = "userId must be a positive id"))]
    pub user_id: u64,
    #[validate(length(min = 1, message = "PGN data is required"))]
    pub pgn_data: String,
    pub white_player: Option<String>,
    pub black_player: Option<String>,
    pub result: Option<String>,
    pub date: Option<DateTime<Utc>>,
    #[validate(nested)]
    pub analysis: Option<SubmittedAnalysis>,
}
