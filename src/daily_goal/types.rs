use serde::Deserialize;
use validator::Validate;

use super::models::{dedup_days, DailyGoal, NewDailyGoal, Weekday};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDailyGoalRequest {
    #[validate(range(min = 1, message = "userId must be a positive id"))]
    pub user_id: u64,
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub repeat_days: Vec<Weekday>,
}

impl From<CreateDailyGoalRequest> for NewDailyGoal {
    fn from(request: CreateDailyGoalRequest) -> Self {
        NewDailyGoal {
            user_id: request.user_id,
            title: request.title,
            completed: request.completed,
            repeat_days: request.repeat_days,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DailyGoalPatch {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,
    pub completed: Option<bool>,
    pub repeat_days: Option<Vec<Weekday>>,
}

impl DailyGoalPatch {
    pub fn apply_to(self, goal: &mut DailyGoal) {
        if let Some(title) = self.title {
            goal.title = title;
        }
        if let Some(completed) = self.completed {
            goal.completed = completed;
        }
        if let Some(repeat_days) = self.repeat_days {
            goal.repeat_days = dedup_days(repeat_days);
        }
    }
}
