use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    models::User,
    service::UserService,
    types::{CreateUserRequest, UserPatch},
};
use crate::extract::{Path, ValidatedJson};
use crate::shared::{AppError, AppState};

fn service(state: &AppState) -> UserService {
    UserService::new(Arc::clone(&state.user_repository), state.config.default_elo)
}

/// HTTP handler for fetching a user profile
///
/// GET /api/user/:id
#[instrument(name = "get_user", skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<User>, AppError> {
    service(&state)
        .get_user(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}

/// HTTP handler for creating a user profile
///
/// POST /api/user
#[instrument(name = "create_user", skip(state, request))]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> Result<Json<User>, AppError> {
    let user = service(&state).create_user(request).await?;
    info!(user_id = user.id, username = %user.username, "User profile created");
    Ok(Json(user))
}

/// HTTP handler for partially updating a user profile
///
/// PATCH /api/user/:id
#[instrument(name = "update_user", skip(state, patch))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    ValidatedJson(patch): ValidatedJson<UserPatch>,
) -> Result<Json<User>, AppError> {
    service(&state)
        .update_user(id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}
