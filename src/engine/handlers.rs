use axum::{extract::State, Json};
use tracing::{info, instrument};

use super::{analyzer::PositionAnalysis, types::AnalyzePositionRequest};
use crate::extract::ValidatedJson;
use crate::shared::{AppError, AppState};

/// HTTP handler for engine analysis of a FEN position
///
/// POST /api/analyze-position
#[instrument(name = "analyze_position", skip(state))]
pub async fn analyze_position(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AnalyzePositionRequest>,
) -> Result<Json<PositionAnalysis>, AppError> {
    let fen = request
        .fen
        .filter(|fen| !fen.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("FEN position required".to_string()))?;
    let depth = request.depth.unwrap_or(state.config.engine_depth);

    let analysis = state.analyzer.analyze(&fen, depth).await?;
    info!(depth, best_move = %analysis.best_move, "Position analyzed");

    Ok(Json(analysis))
}
