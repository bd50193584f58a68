use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    models::{EloEntry, NewEloEntry},
    repository::EloRepository,
    types::CreateEloEntryRequest,
};
use crate::shared::AppError;

/// Service for recording and listing rating changes
pub struct EloService {
    repository: Arc<dyn EloRepository + Send + Sync>,
}

impl EloService {
    pub fn new(repository: Arc<dyn EloRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, request), fields(user_id = request.user_id))]
    pub async fn record_change(&self, request: CreateEloEntryRequest) -> Result<EloEntry, AppError> {
        let entry = self
            .repository
            .create_entry(NewEloEntry::from(request))
            .await?;

        info!(
            entry_id = entry.id,
            elo_change = entry.elo_change,
            new_elo = entry.new_elo,
            "Rating change recorded"
        );
        Ok(entry)
    }

    #[instrument(skip(self))]
    pub async fn history(&self, user_id: u64) -> Result<Vec<EloEntry>, AppError> {
        self.repository.list_entries(user_id).await
    }
}
