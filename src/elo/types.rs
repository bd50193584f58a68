use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use super::models::NewEloEntry;

/// Bounds on the rating swing a single entry may record
pub const MIN_ELO_CHANGE: i32 = -10_000;
pub const MAX_ELO_CHANGE: i32 = 10_000;

/// Highest rating an entry may report
pub const MAX_ELO: i32 = 10_000;

/// Request payload for recording a rating change
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEloEntryRequest {
    #[validate(range(min = 1, message = "userId must be a positive id"))]
    pub user_id: u64,
    #[validate(range(
        min = MIN_ELO_CHANGE,
        max = MAX_ELO_CHANGE,
        message = "eloChange must be between -10000 and 10000"
    ))]
    pub elo_change: i32,
    #[validate(range(min = 0, max = MAX_ELO, message = "newElo must be between 0 and 10000"))]
    pub new_elo: i32,
    pub date: DateTime<Utc>,
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

impl From<CreateEloEntryRequest> for NewEloEntry {
    fn from(request: CreateEloEntryRequest) -> Self {
        // blank notes are stored as absent
        let notes = request.notes.filter(|n| !n.trim().is_empty());

        NewEloEntry {
            user_id: request.user_id,
            elo_change: request.elo_change,
            new_elo: request.new_elo,
            date: request.date,
            notes,
        }
    }
}
