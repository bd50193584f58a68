use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::MoveClassification;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveEvaluation {
    #[serde(rename = "move")]
    pub san: String,
    /// Engine evaluation after the move, in pawns from white's side
    pub evaluation: f64,
    pub classification: MoveClassification,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_move: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisData {
    pub moves: Vec<MoveEvaluation>,
}

/// A stored game and its per-move evaluations; never modified after creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameAnalysis {
    pub id: u64,
    pub user_id: u64,
    pub pgn_data: String,
    pub white_player: Option<String>,
    pub black_player: Option<String>,
    pub result: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub analysis: Option<AnalysisData>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewGameAnalysis {
    pub user_id: u64,
    pub pgn_data: String,
    pub white_player: Option<String>,
    pub black_player: Option<String>,
    pub result: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub analysis: Option<AnalysisData>,
}

impl NewGameAnalysis {
    pub fn into_analysis(self, id: u64, created_at: DateTime<Utc>) -> GameAnalysis {
        GameAnalysis {
            id,
            user_id: self.user_id,
            pgn_data: self.pgn_data,
            white_player: self.white_player,
            black_player: self.black_player,
            result: self.result,
            date: self.date,
            analysis: self.analysis,
            created_at,
        }
    }
}
