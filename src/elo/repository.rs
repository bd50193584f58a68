use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

use super::models::{EloEntry, NewEloEntry};
use crate::shared::AppError;
use crate::table::Table;
use crate::user::repository::UserRepository;

/// Trait for ELO entry repository operations
#[async_trait]
pub trait EloRepository: Send + Sync {
    /// Stores the entry and moves the owning user's rating by its change.
    ///
    /// A missing owner does not fail the write; the rating update is skipped.
    async fn create_entry(&self, entry: NewEloEntry) -> Result<EloEntry, AppError>;

    /// All entries for a user, oldest date first
    async fn list_entries(&self, user_id: u64) -> Result<Vec<EloEntry>, AppError>;

    /// Entries dated at or after `cutoff`, oldest date first
    async fn entries_since(
        &self,
        user_id: u64,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<EloEntry>, AppError>;

    /// The last `limit` entries recorded for a user, in insertion order
    async fn recent_entries(&self, user_id: u64, limit: usize) -> Result<Vec<EloEntry>, AppError>;
}

/// In-memory implementation of EloRepository
///
/// The entry table lock is held while the owner's rating is updated, so
/// concurrent rating writes are serialized. The user lock is always taken
/// after this one.
pub struct InMemoryEloRepository {
    entries: Mutex<Table<EloEntry>>,
    users: Arc<dyn UserRepository + Send + Sync>,
}

impl InMemoryEloRepository {
    pub fn new(users: Arc<dyn UserRepository + Send + Sync>) -> Self {
        Self {
            entries: Mutex::new(Table::new()),
            users,
        }
    }

    async fn select(&self, predicate: impl Fn(&EloEntry) -> bool) -> Vec<EloEntry> {
        let entries = self.entries.lock().await;
        entries.values().filter(|e| predicate(e)).cloned().collect()
    }
}

fn sort_by_date(entries: &mut [EloEntry]) {
    entries.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
}

#[async_trait]
impl EloRepository for InMemoryEloRepository {
    #[instrument(skip(self, entry), fields(user_id = entry.user_id, elo_change = entry.elo_change))]
    async fn create_entry(&self, entry: NewEloEntry) -> Result<EloEntry, AppError> {
        let mut entries = self.entries.lock().await;

        // The rating moves first so a failed update leaves no entry behind.
        let owner = self
            .users
            .apply_elo_change(entry.user_id, entry.elo_change)
            .await?;
        let created = entries.insert_with(|id| entry.into_entry(id)).clone();

        match owner {
            Some(user) => debug!(
                entry_id = created.id,
                current_elo = user.current_elo,
                "ELO entry stored and user rating updated"
            ),
            None => warn!(
                entry_id = created.id,
                user_id = created.user_id,
                "ELO entry stored for unknown user; rating update skipped"
            ),
        }

        Ok(created)
    }

    #[instrument(skip(self))]
    async fn list_entries(&self, user_id: u64) -> Result<Vec<EloEntry>, AppError> {
        let mut entries = self.select(|e| e.user_id == user_id).await;
        sort_by_date(&mut entries);
        Ok(entries)
    }

    #[instrument(skip(self))]
    async fn entries_since(
        &self,
        user_id: u64,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<EloEntry>, AppError> {
        let mut entries = self
            .select(|e| e.user_id == user_id && e.date >= cutoff)
            .await;
        sort_by_date(&mut entries);
        Ok(entries)
    }

    #[instrument(skip(self))]
    async fn recent_entries(&self, user_id: u64, limit: usize) -> Result<Vec<EloEntry>, AppError> {
        let mut entries = self.select(|e| e.user_id == user_id).await;
        entries.sort_by_key(|e| e.id);
        let skip = entries.len().saturating_sub(limit);
        Ok(entries.split_off(skip))
    }
}
