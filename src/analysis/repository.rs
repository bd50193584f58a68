use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;
use tracing::{debug, instrument};

use super::models::{GameAnalysis, NewGameAnalysis};
use crate::shared::AppError;
use crate::table::{lock, Table};

#[async_trait]
pub trait AnalysisRepository {
    async fn create_analysis(&self, analysis: NewGameAnalysis) -> Result<GameAnalysis, AppError>;
    async fn get_analysis(&self, id: u64) -> Result<Option<GameAnalysis>, AppError>;

    /// Analyses owned by `user_id`, newest first
    async fn list_analyses(&self, user_id: u64) -> Result<Vec<GameAnalysis>, AppError>;
}

pub struct InMemoryAnalysisRepository {
    analyses: Mutex<Table<GameAnalysis>>,
}

impl Default for InMemoryAnalysisRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryAnalysisRepository {
    pub fn new() -> Self {
        Self {
            analyses: Mutex::new(Table::new()),
        }
    }
}

#[async_trait]
impl AnalysisRepository for InMemoryAnalysisRepository {
    #[instrument(skip(self, analysis), fields(user_id = analysis.user_id))]
    async fn create_analysis(&self, analysis: NewGameAnalysis) -> Result<GameAnalysis, AppError> {
        let mut analyses = lock(&self.analyses, "game_analyses")?;
        let created = analyses
            .insert_with(|id| analysis.into_analysis(id, Utc::now()))
            .clone();

        debug!(analysis_id = created.id, "Game analysis stored in memory");
        Ok(created)
    }

    #[instrument(skip(self))]
    async fn get_analysis(&self, id: u64) -> Result<Option<GameAnalysis>, AppError> {
        let analyses = lock(&self.analyses, "game_analyses")?;
        Ok(analyses.get(id).cloned())
    }

    #[instrument(skip(self))]
    async fn list_analyses(&self, user_id: u64) -> Result<Vec<GameAnalysis>, AppError> {
        let analyses = lock(&self.analyses, "game_analyses")?;
        let mut selected: Vec<GameAnalysis> = analyses
            .values()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect();

        selected.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(selected)
    }
}
