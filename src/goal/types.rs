use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use super::models::{Goal, GoalType, NewGoal};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGoalRequest {
    #[validate(range(min = 1, message = "userId must be a positive id"))]
    pub user_id: u64,
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub goal_type: GoalType,
    #[serde(default)]
    pub completed: bool,
    pub target_date: Option<DateTime<Utc>>,
}

impl From<CreateGoalRequest> for NewGoal {
    fn from(request: CreateGoalRequest) -> Self {
        NewGoal {
            user_id: request.user_id,
            title: request.title,
            description: request.description,
            goal_type: request.goal_type,
            completed: request.completed,
            target_date: request.target_date,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GoalPatch {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,
    /// `null` clears the field; an absent key leaves it unchanged
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,
    #[serde(rename = "type")]
    pub goal_type: Option<GoalType>,
    pub completed: Option<bool>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub target_date: Option<Option<DateTime<Utc>>>,
}

impl GoalPatch {
    pub fn apply_to(self, goal: &mut Goal) {
        if let Some(title) = self.title {
            goal.title = title;
        }
        if let Some(description) = self.description {
            goal.description = description;
        }
        if let Some(goal_type) = self.goal_type {
            goal.goal_type = goal_type;
        }
        if let Some(completed) = self.completed {
            goal.completed = completed;
        }
        if let Some(target_date) = self.target_date {
            goal.target_date = target_date;
        }
    }
}

/// Query string for listing goals, e.g. `?type=weekly`
#[derive(Debug, Default, Deserialize)]
pub struct GoalListQuery {
    #[serde(rename = "type")]
    pub goal_type: Option<GoalType>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn goal() -> Goal {
        NewGoal {
            user_id: 1,
            title: "Reach 1500".to_string(),
            description: Some("Rapid pool".to_string()),
            goal_type: GoalType::Yearly,
            completed: false,
            target_date: Some(Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap()),
        }
        .into_goal(1, Utc::now())
    }

    #[test]
    fn test_null_clears_optional_fields() {
        let mut goal = goal();
        let patch: GoalPatch =
            serde_json::from_str(r#"{"description": null, "targetDate": null}"#).unwrap();
        patch.apply_to(&mut goal);

        assert_eq!(goal.description, None);
        assert_eq!(goal.target_date, None);
    }

    #[test]
    fn test_absent_keys_leave_fields_alone() {
        let mut goal = goal();
        let before = goal.clone();
        let patch: GoalPatch = serde_json::from_str(r#"{"completed": true}"#).unwrap();
        patch.apply_to(&mut goal);

        assert!(goal.completed);
        assert_eq!(goal.description, before.description);
        assert_eq!(goal.target_date, before.target_date);
    }
}
