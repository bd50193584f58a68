use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::{debug, instrument};

use super::{models::EloEntry, service::EloService, types::CreateEloEntryRequest};
use crate::extract::{Path, ValidatedJson};
use crate::shared::{AppError, AppState};

/// HTTP handler for a user's rating history
///
/// GET /api/elo/:userId
/// Returns entries oldest first
#[instrument(name = "list_elo_entries", skip(state))]
pub async fn list_elo_entries(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
) -> Result<Json<Vec<EloEntry>>, AppError> {
    let service = EloService::new(Arc::clone(&state.elo_repository));
    let entries = service.history(user_id).await?;

    debug!(entry_count = entries.len(), "ELO history listed");
    Ok(Json(entries))
}

/// HTTP handler for recording a rating change
///
/// POST /api/elo
#[instrument(name = "create_elo_entry", skip(state, request))]
pub async fn create_elo_entry(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateEloEntryRequest>,
) -> Result<Json<EloEntry>, AppError> {
    let service = EloService::new(Arc::clone(&state.elo_repository));
    let entry = service.record_change(request).await?;
    Ok(Json(entry))
}
