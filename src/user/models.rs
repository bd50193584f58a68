use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::EngineKind;

/// Stored user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub username: String,
    pub current_elo: i32,
    pub peak_elo: i32,
    pub profile_complete: bool,
    pub settings: UserSettings,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Moves the current rating by `delta`, raising the peak if it is exceeded.
    ///
    /// The rating saturates at the `i32` bounds instead of wrapping.
    pub fn apply_elo_change(&mut self, delta: i32) {
        self.current_elo = self.current_elo.saturating_add(delta);
        self.peak_elo = self.peak_elo.max(self.current_elo);
    }
}

/// Engine display preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub show_engine_arrows: bool,
    pub engine_depth: u32,
    pub preferred_engine: EngineKind,
    pub sidebar_collapsed: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            show_engine_arrows: true,
            engine_depth: 15,
            preferred_engine: EngineKind::Stockfish17,
            sidebar_collapsed: false,
        }
    }
}

/// Fully resolved input for a new user; the store adds id and timestamp
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub current_elo: i32,
    pub peak_elo: i32,
    pub profile_complete: bool,
    pub settings: UserSettings,
}

impl NewUser {
    pub fn into_user(self, id: u64, created_at: DateTime<Utc>) -> User {
        User {
            id,
            username: self.username,
            current_elo: self.current_elo,
            peak_elo: self.peak_elo,
            profile_complete: self.profile_complete,
            settings: self.settings,
            created_at,
        }
    }
}
