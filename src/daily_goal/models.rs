use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Weekday tag a daily goal repeats on
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyGoal {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub completed: bool,
    pub repeat_days: Vec<Weekday>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewDailyGoal {
    pub user_id: u64,
    pub title: String,
    pub completed: bool,
    pub repeat_days: Vec<Weekday>,
}

impl NewDailyGoal {
    pub fn into_daily_goal(self, id: u64, created_at: DateTime<Utc>) -> DailyGoal {
        DailyGoal {
            id,
            user_id: self.user_id,
            title: self.title,
            completed: self.completed,
            repeat_days: dedup_days(self.repeat_days),
            created_at,
        }
    }
}

/// Drops repeated weekday tags, keeping first occurrence order
pub fn dedup_days(days: Vec<Weekday>) -> Vec<Weekday> {
    let mut seen = Vec::with_capacity(days.len());
    for day in days {
        if !seen.contains(&day) {
            seen.push(day);
        }
    }
    seen
}
