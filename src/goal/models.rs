use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Horizon a goal belongs to; yearly goals make up the masterlist
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GoalType {
    Weekly,
    Monthly,
    Yearly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub goal_type: GoalType,
    pub completed: bool,
    pub target_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewGoal {
    pub user_id: u64,
    pub title: String,
    pub description: Option<String>,
    pub goal_type: GoalType,
    pub completed: bool,
    pub target_date: Option<DateTime<Utc>>,
}

impl NewGoal {
    pub fn into_goal(self, id: u64, created_at: DateTime<Utc>) -> Goal {
        Goal {
            id,
            user_id: self.user_id,
            title: self.title,
            description: self.description,
            goal_type: self.goal_type,
            completed: self.completed,
            target_date: self.target_date,
            created_at,
        }
    }
}
