use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;
use tracing::{debug, instrument};

use super::{
    models::{Goal, GoalType, NewGoal},
    types::GoalPatch,
};
use crate::shared::AppError;
use crate::table::{lock, Table};

#[async_trait]
pub trait GoalRepository {
    async fn create_goal(&self, goal: NewGoal) -> Result<Goal, AppError>;
    async fn get_goal(&self, id: u64) -> Result<Option<Goal>, AppError>;

    /// Goals owned by `user_id`, optionally of one type, newest first
    async fn list_goals(
        &self,
        user_id: u64,
        goal_type: Option<GoalType>,
    ) -> Result<Vec<Goal>, AppError>;

    async fn update_goal(&self, id: u64, patch: GoalPatch) -> Result<Option<Goal>, AppError>;
    async fn delete_goal(&self, id: u64) -> Result<bool, AppError>;
}

pub struct InMemoryGoalRepository {
    goals: Mutex<Table<Goal>>,
}

impl Default for InMemoryGoalRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryGoalRepository {
    pub fn new() -> Self {
        Self {
            goals: Mutex::new(Table::new()),
        }
    }
}

#[async_trait]
impl GoalRepository for InMemoryGoalRepository {
    #[instrument(skip(self, goal), fields(user_id = goal.user_id, goal_type = %goal.goal_type))]
    async fn create_goal(&self, goal: NewGoal) -> Result<Goal, AppError> {
        let mut goals = lock(&self.goals, "goals")?;
        let created = goals.insert_with(|id| goal.into_goal(id, Utc::now())).clone();

        debug!(goal_id = created.id, "Goal stored in memory");
        Ok(created)
    }

    #[instrument(skip(self))]
    async fn get_goal(&self, id: u64) -> Result<Option<Goal>, AppError> {
        let goals = lock(&self.goals, "goals")?;
        Ok(goals.get(id).cloned())
    }

    #[instrument(skip(self))]
    async fn list_goals(
        &self,
        user_id: u64,
        goal_type: Option<GoalType>,
    ) -> Result<Vec<Goal>, AppError> {
        let goals = lock(&self.goals, "goals")?;
        let mut selected: Vec<Goal> = goals
            .values()
            .filter(|g| g.user_id == user_id)
            .filter(|g| goal_type.map_or(true, |t| g.goal_type == t))
            .cloned()
            .collect();

        selected.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(selected)
    }

    #[instrument(skip(self, patch))]
    async fn update_goal(&self, id: u64, patch: GoalPatch) -> Result<Option<Goal>, AppError> {
        let mut goals = lock(&self.goals, "goals")?;
        Ok(goals.get_mut(id).map(|goal| {
            patch.apply_to(goal);
            goal.clone()
        }))
    }

    #[instrument(skip(self))]
    async fn delete_goal(&self, id: u64) -> Result<bool, AppError> {
        let mut goals = lock(&self.goals, "goals")?;
        Ok(goals.remove(id))
    }
}
