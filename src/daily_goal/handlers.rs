use axum::{extract::State, Json};
use tracing::{info, instrument};

use super::{
    models::{DailyGoal, NewDailyGoal},
    types::{CreateDailyGoalRequest, DailyGoalPatch},
};
use crate::extract::{Path, ValidatedJson};
use crate::shared::{AppError, AppState, SuccessResponse};

/// GET /api/daily-goals/:userId
#[instrument(name = "list_daily_goals", skip(state))]
pub async fn list_daily_goals(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
) -> Result<Json<Vec<DailyGoal>>, AppError> {
    let goals = state.daily_goal_repository.list_daily_goals(user_id).await?;
    Ok(Json(goals))
}

/// POST /api/daily-goals
#[instrument(name = "create_daily_goal", skip(state, request))]
pub async fn create_daily_goal(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateDailyGoalRequest>,
) -> Result<Json<DailyGoal>, AppError> {
    let goal = state
        .daily_goal_repository
        .create_daily_goal(NewDailyGoal::from(request))
        .await?;

    info!(daily_goal_id = goal.id, user_id = goal.user_id, "Daily goal created");
    Ok(Json(goal))
}

/// PATCH /api/daily-goals/:id
#[instrument(name = "update_daily_goal", skip(state, patch))]
pub async fn update_daily_goal(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    ValidatedJson(patch): ValidatedJson<DailyGoalPatch>,
) -> Result<Json<DailyGoal>, AppError> {
    state
        .daily_goal_repository
        .update_daily_goal(id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Goal not found".to_string()))
}

/// DELETE /api/daily-goals/:id
#[instrument(name = "delete_daily_goal", skip(state))]
pub async fn delete_daily_goal(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<SuccessResponse>, AppError> {
    if !state.daily_goal_repository.delete_daily_goal(id).await? {
        return Err(AppError::NotFound("Goal not found".to_string()));
    }

    info!(daily_goal_id = id, "Daily goal deleted");
    Ok(Json(SuccessResponse::ok()))
}
