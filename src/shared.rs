use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use validator::ValidationErrors;

use crate::analysis::repository::{AnalysisRepository, InMemoryAnalysisRepository};
use crate::config::ServerConfig;
use crate::course::repository::{CourseRepository, InMemoryCourseRepository};
use crate::daily_goal::repository::{DailyGoalRepository, InMemoryDailyGoalRepository};
use crate::elo::repository::{EloRepository, InMemoryEloRepository};
use crate::engine::{MockAnalyzer, PositionAnalyzer};
use crate::goal::repository::{GoalRepository, InMemoryGoalRepository};
use crate::user::repository::{InMemoryUserRepository, UserRepository};

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
    pub user_repository: Arc<dyn UserRepository + Send + Sync>,
    pub elo_repository: Arc<dyn EloRepository + Send + Sync>,
    pub daily_goal_repository: Arc<dyn DailyGoalRepository + Send + Sync>,
    pub course_repository: Arc<dyn CourseRepository + Send + Sync>,
    pub goal_repository: Arc<dyn GoalRepository + Send + Sync>,
    pub analysis_repository: Arc<dyn AnalysisRepository + Send + Sync>,
    pub analyzer: Arc<dyn PositionAnalyzer>,
}

impl AppState {
    /// Builds the process-lifetime in-memory store.
    ///
    /// The ELO repository shares the user repository so that recording a
    /// rating change also moves the owner's current and peak rating.
    pub fn in_memory(config: ServerConfig) -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        let elo = Arc::new(InMemoryEloRepository::new(users.clone()));

        Self {
            config,
            user_repository: users,
            elo_repository: elo,
            daily_goal_repository: Arc::new(InMemoryDailyGoalRepository::new()),
            course_repository: Arc::new(InMemoryCourseRepository::new()),
            goal_repository: Arc::new(InMemoryGoalRepository::new()),
            analysis_repository: Arc::new(InMemoryAnalysisRepository::new()),
            analyzer: Arc::new(MockAnalyzer::new()),
        }
    }
}

/// A single field-level validation failure reported back to the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Body returned by delete endpoints
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        errors: Vec<FieldError>,
    },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal,
}

impl AppError {
    pub fn invalid_field(field: &str, message: &str) -> Self {
        AppError::Validation {
            message: format!("Invalid value for {}", field),
            errors: vec![FieldError::new(field, message)],
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut details: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                let field = field.to_string();
                field_errors.iter().map(move |error| {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    FieldError::new(field.clone(), message)
                })
            })
            .collect();
        details.sort_by(|a, b| a.field.cmp(&b.field));

        AppError::Validation {
            message: "Invalid request data".to_string(),
            errors: details,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation {
            message: "Invalid request body".to_string(),
            errors: vec![FieldError::new("body", rejection.body_text())],
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation {
            message: "Invalid path parameter".to_string(),
            errors: vec![FieldError::new("path", rejection.body_text())],
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation {
            message: "Invalid query string".to_string(),
            errors: vec![FieldError::new("query", rejection.body_text())],
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation { message, errors } => (
                StatusCode::BAD_REQUEST,
                json!({ "error": message, "details": errors }),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Internal server error" }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
pub mod test_utils {
    use super::*;
    use crate::goal::{
        models::{Goal, GoalType, NewGoal},
        types::GoalPatch,
    };
    use async_trait::async_trait;

    /// Goal repository whose every call fails, for exercising the 500 path
    pub struct FailingGoalRepository;

    #[async_trait]
    impl GoalRepository for FailingGoalRepository {
        async fn create_goal(&self, _goal: NewGoal) -> Result<Goal, AppError> {
            Err(AppError::Internal)
        }
        async fn get_goal(&self, _id: u64) -> Result<Option<Goal>, AppError> {
            Err(AppError::Internal)
        }
        async fn list_goals(
            &self,
            _user_id: u64,
            _goal_type: Option<GoalType>,
        ) -> Result<Vec<Goal>, AppError> {
            Err(AppError::Internal)
        }
        async fn update_goal(&self, _id: u64, _patch: GoalPatch) -> Result<Option<Goal>, AppError> {
            Err(AppError::Internal)
        }
        async fn delete_goal(&self, _id: u64) -> Result<bool, AppError> {
            Err(AppError::Internal)
        }
    }

    /// Builder for creating AppState with overrides for testing
    pub struct AppStateBuilder {
        config: ServerConfig,
        goal_repository: Option<Arc<dyn GoalRepository + Send + Sync>>,
    }

    impl AppStateBuilder {
        pub fn new() -> Self {
            Self {
                config: ServerConfig::default(),
                goal_repository: None,
            }
        }

        pub fn with_config(mut self, config: ServerConfig) -> Self {
            self.config = config;
            self
        }

        pub fn with_goal_repository(mut self, repo: Arc<dyn GoalRepository + Send + Sync>) -> Self {
            self.goal_repository = Some(repo);
            self
        }

        pub fn build(self) -> AppState {
            let mut state = AppState::in_memory(self.config);
            if let Some(repo) = self.goal_repository {
                state.goal_repository = repo;
            }
            state
        }
    }

    impl Default for AppStateBuilder {
        fn default() -> Self {
            Self::new()
        }
    }

    pub async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn validation_error_renders_details() {
        let error = AppError::invalid_field("username", "Username is already taken");
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = read_json(response).await;
        assert_eq!(body["details"][0]["field"], "username");
        assert_eq!(body["details"][0]["message"], "Username is already taken");
    }

    #[tokio::test]
    async fn internal_error_hides_detail() {
        let response = AppError::Internal.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = read_json(response).await;
        assert_eq!(body["error"], "Internal server error");
    }
}
