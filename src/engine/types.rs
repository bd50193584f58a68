use serde::Deserialize;
use validator::Validate;

/// Request payload for analyzing a position
#[derive(Debug, Deserialize, Validate)]
pub struct AnalyzePositionRequest {
    pub fen: Option<String>,
    #[validate(range(min = 1, max = 40))]
    pub depth: Option<u32>,
}
