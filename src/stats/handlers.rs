use axum::{extract::State, Json};
use std::str::FromStr;
use tracing::{info, instrument, warn};

use super::{
    elo::{EloStats, RecentPerformance},
    period::StatsPeriod,
    progress::ProgressReport,
    service::StatsService,
};
use crate::extract::Path;
use crate::shared::{AppError, AppState};

/// HTTP handler for rating change over a period window
///
/// GET /api/elo-stats/:userId/:period
/// period is one of week, month, year
#[instrument(name = "get_elo_stats", skip(state))]
pub async fn get_elo_stats(
    State(state): State<AppState>,
    Path((user_id, period)): Path<(u64, String)>,
) -> Result<Json<EloStats>, AppError> {
    let period = StatsPeriod::from_str(&period).map_err(|_| {
        warn!(period = %period, "Rejected unknown stats period");
        AppError::BadRequest("Invalid period".to_string())
    })?;

    let stats = StatsService::from_state(&state)
        .elo_stats(user_id, period)
        .await?;
    info!(%period, change = stats.change, "ELO stats computed");
    Ok(Json(stats))
}

/// GET /api/elo-performance/:userId
#[instrument(name = "get_recent_performance", skip(state))]
pub async fn get_recent_performance(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
) -> Result<Json<RecentPerformance>, AppError> {
    let performance = StatsService::from_state(&state)
        .recent_performance(user_id)
        .await?;
    Ok(Json(performance))
}

/// GET /api/progress/:userId
#[instrument(name = "get_progress", skip(state))]
pub async fn get_progress(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
) -> Result<Json<ProgressReport>, AppError> {
    let report = StatsService::from_state(&state).progress(user_id).await?;
    Ok(Json(report))
}
