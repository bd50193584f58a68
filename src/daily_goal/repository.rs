use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;
use tracing::{debug, instrument};

use super::{
    models::{DailyGoal, NewDailyGoal},
    types::DailyGoalPatch,
};
use crate::shared::AppError;
use crate::table::{lock, Table};

#[async_trait]
pub trait DailyGoalRepository {
    async fn create_daily_goal(&self, goal: NewDailyGoal) -> Result<DailyGoal, AppError>;
    async fn get_daily_goal(&self, id: u64) -> Result<Option<DailyGoal>, AppError>;

    /// Daily goals owned by `user_id`, newest first
    async fn list_daily_goals(&self, user_id: u64) -> Result<Vec<DailyGoal>, AppError>;

    async fn update_daily_goal(
        &self,
        id: u64,
        patch: DailyGoalPatch,
    ) -> Result<Option<DailyGoal>, AppError>;
    async fn delete_daily_goal(&self, id: u64) -> Result<bool, AppError>;
}

pub struct InMemoryDailyGoalRepository {
    goals: Mutex<Table<DailyGoal>>,
}

impl Default for InMemoryDailyGoalRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDailyGoalRepository {
    pub fn new() -> Self {
        Self {
            goals: Mutex::new(Table::new()),
        }
    }
}

#[async_trait]
impl DailyGoalRepository for InMemoryDailyGoalRepository {
    #[instrument(skip(self, goal), fields(user_id = goal.user_id))]
    async fn create_daily_goal(&self, goal: NewDailyGoal) -> Result<DailyGoal, AppError> {
        let mut goals = lock(&self.goals, "daily_goals")?;
        let created = goals
            .insert_with(|id| goal.into_daily_goal(id, Utc::now()))
            .clone();

        debug!(daily_goal_id = created.id, "Daily goal stored in memory");
        Ok(created)
    }

    #[instrument(skip(self))]
    async fn get_daily_goal(&self, id: u64) -> Result<Option<DailyGoal>, AppError> {
        let goals = lock(&self.goals, "daily_goals")?;
        Ok(goals.get(id).cloned())
    }

    #[instrument(skip(self))]
    async fn list_daily_goals(&self, user_id: u64) -> Result<Vec<DailyGoal>, AppError> {
        let goals = lock(&self.goals, "daily_goals")?;
        let mut selected: Vec<DailyGoal> = goals
            .values()
            .filter(|g| g.user_id == user_id)
            .cloned()
            .collect();

        selected.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(selected)
    }

    #[instrument(skip(self, patch))]
    async fn update_daily_goal(
        &self,
        id: u64,
        patch: DailyGoalPatch,
    ) -> Result<Option<DailyGoal>, AppError> {
        let mut goals = lock(&self.goals, "daily_goals")?;
        Ok(goals.get_mut(id).map(|goal| {
            patch.apply_to(goal);
            goal.clone()
        }))
    }

    #[instrument(skip(self))]
    async fn delete_daily_goal(&self, id: u64) -> Result<bool, AppError> {
        let mut goals = lock(&self.goals, "daily_goals")?;
        Ok(goals.remove(id))
    }
}
