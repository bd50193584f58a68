use axum::{
    routing::{get, post},
    Router,
};

use crate::shared::AppState;
use crate::{analysis, course, daily_goal, elo, engine, goal, stats, user};

/// Builds the `/api` surface over the given state.
///
/// List routes take the owning user's id in the same position that the
/// record routes take the record id, so both share the `:id` segment.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/user", post(user::create_user))
        .route("/api/user/:id", get(user::get_user).patch(user::update_user))
        .route("/api/elo", post(elo::create_elo_entry))
        .route("/api/elo/:id", get(elo::list_elo_entries))
        .route("/api/elo-stats/:user_id/:period", get(stats::get_elo_stats))
        .route("/api/elo-performance/:id", get(stats::get_recent_performance))
        .route("/api/progress/:id", get(stats::get_progress))
        .route("/api/daily-goals", post(daily_goal::create_daily_goal))
        .route(
            "/api/daily-goals/:id",
            get(daily_goal::list_daily_goals)
                .patch(daily_goal::update_daily_goal)
                .delete(daily_goal::delete_daily_goal),
        )
        .route("/api/courses", post(course::create_course))
        .route(
            "/api/courses/:id",
            get(course::list_courses)
                .patch(course::update_course)
                .delete(course::delete_course),
        )
        .route("/api/goals", post(goal::create_goal))
        .route(
            "/api/goals/:id",
            get(goal::list_goals)
                .patch(goal::update_goal)
                .delete(goal::delete_goal),
        )
        .route("/api/game-analyses", post(analysis::create_analysis))
        .route("/api/game-analyses/:id", get(analysis::list_analyses))
        .route("/api/game-analyses/single/:id", get(analysis::get_analysis))
        .route("/api/analyze-position", post(engine::analyze_position))
        .with_state(state)
}

