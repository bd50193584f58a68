use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded rating change; never modified after creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EloEntry {
    pub id: u64,
    pub user_id: u64,
    pub elo_change: i32,
    /// Rating after the change, as reported by the client at the time
    pub new_elo: i32,
    pub date: DateTime<Utc>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEloEntry {
    pub user_id: u64,
    pub elo_change: i32,
    pub new_elo: i32,
    pub date: DateTime<Utc>,
    pub notes: Option<String>,
}

impl NewEloEntry {
    pub fn into_entry(self, id: u64) -> EloEntry {
        EloEntry {
            id,
            user_id: self.user_id,
            elo_change: self.elo_change,
            new_elo: self.new_elo,
            date: self.date,
            notes: self.notes,
        }
    }
}
