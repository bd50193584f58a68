use axum::{extract::State, Json};
use tracing::{info, instrument};

use super::{
    models::{Goal, NewGoal},
    types::{CreateGoalRequest, GoalListQuery, GoalPatch},
};
use crate::extract::{Path, Query, ValidatedJson};
use crate::shared::{AppError, AppState, SuccessResponse};

/// HTTP handler for listing a user's goals
///
/// GET /api/goals/:userId?type=weekly|monthly|yearly
/// Returns newest first
#[instrument(name = "list_goals", skip(state))]
pub async fn list_goals(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
    Query(query): Query<GoalListQuery>,
) -> Result<Json<Vec<Goal>>, AppError> {
    let goals = state
        .goal_repository
        .list_goals(user_id, query.goal_type)
        .await?;
    Ok(Json(goals))
}

/// POST /api/goals
#[instrument(name = "create_goal", skip(state, request))]
pub async fn create_goal(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateGoalRequest>,
) -> Result<Json<Goal>, AppError> {
    let goal = state.goal_repository.create_goal(NewGoal::from(request)).await?;
    info!(goal_id = goal.id, goal_type = %goal.goal_type, "Goal created");
    Ok(Json(goal))
}

/// PATCH /api/goals/:id
#[instrument(name = "update_goal", skip(state, patch))]
pub async fn update_goal(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    ValidatedJson(patch): ValidatedJson<GoalPatch>,
) -> Result<Json<Goal>, AppError> {
    state
        .goal_repository
        .update_goal(id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Goal not found".to_string()))
}

/// DELETE /api/goals/:id
#[instrument(name = "delete_goal", skip(state))]
pub async fn delete_goal(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<SuccessResponse>, AppError> {
    if !state.goal_repository.delete_goal(id).await? {
        return Err(AppError::NotFound("Goal not found".to_string()));
    }

    info!(goal_id = id, "Goal deleted");
    Ok(Json(SuccessResponse::ok()))
}
