use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, instrument};

use super::{
    elo::{EloStats, RecentPerformance, RECENT_ENTRY_LIMIT},
    period::StatsPeriod,
    progress::ProgressReport,
};
use crate::course::repository::CourseRepository;
use crate::daily_goal::repository::DailyGoalRepository;
use crate::elo::repository::EloRepository;
use crate::goal::repository::GoalRepository;
use crate::shared::{AppError, AppState};

/// Read-side aggregation over the store; nothing is cached between calls
pub struct StatsService {
    elo_repository: Arc<dyn EloRepository + Send + Sync>,
    daily_goal_repository: Arc<dyn DailyGoalRepository + Send + Sync>,
    goal_repository: Arc<dyn GoalRepository + Send + Sync>,
    course_repository: Arc<dyn CourseRepository + Send + Sync>,
}

impl StatsService {
    pub fn new(
        elo_repository: Arc<dyn EloRepository + Send + Sync>,
        daily_goal_repository: Arc<dyn DailyGoalRepository + Send + Sync>,
        goal_repository: Arc<dyn GoalRepository + Send + Sync>,
        course_repository: Arc<dyn CourseRepository + Send + Sync>,
    ) -> Self {
        Self {
            elo_repository,
            daily_goal_repository,
            goal_repository,
            course_repository,
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(
            Arc::clone(&state.elo_repository),
            Arc::clone(&state.daily_goal_repository),
            Arc::clone(&state.goal_repository),
            Arc::clone(&state.course_repository),
        )
    }

    pub async fn elo_stats(&self, user_id: u64, period: StatsPeriod) -> Result<EloStats, AppError> {
        self.elo_stats_at(user_id, period, Utc::now()).await
    }

    /// Rating change over the window of `period` ending at `now`
    #[instrument(skip(self))]
    pub async fn elo_stats_at(
        &self,
        user_id: u64,
        period: StatsPeriod,
        now: DateTime<Utc>,
    ) -> Result<EloStats, AppError> {
        let cutoff = period.cutoff(now);
        let entries = self.elo_repository.entries_since(user_id, cutoff).await?;
        let stats = EloStats::from_window(entries);

        debug!(
            %period,
            %cutoff,
            change = stats.change,
            entry_count = stats.entries.len(),
            "Computed ELO window"
        );
        Ok(stats)
    }

    #[instrument(skip(self))]
    pub async fn recent_performance(&self, user_id: u64) -> Result<RecentPerformance, AppError> {
        let recent = self
            .elo_repository
            .recent_entries(user_id, RECENT_ENTRY_LIMIT)
            .await?;
        Ok(RecentPerformance::from_entries(&recent))
    }

    #[instrument(skip(self))]
    pub async fn progress(&self, user_id: u64) -> Result<ProgressReport, AppError> {
        let daily_goals = self.daily_goal_repository.list_daily_goals(user_id).await?;
        let goals = self.goal_repository.list_goals(user_id, None).await?;
        let courses = self.course_repository.list_courses(user_id).await?;

        Ok(ProgressReport::build(&daily_goals, &goals, &courses))
    }
}
