use axum::http::StatusCode;
use serde_json::{json, Value};

use super::setup::TestSetup;

// ============================================================================
// Test Actions - Common operations against the API
// ============================================================================

impl TestSetup {
    /// Creates a user and returns its id
    pub async fn create_user(&self, username: &str, current_elo: i32) -> u64 {
        let (status, body) = self
            .post(
                "/api/user",
                json!({ "username": username, "currentElo": current_elo }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "create user failed: {body}");
        body["id"].as_u64().unwrap()
    }

    pub async fn record_elo(&self, user_id: u64, elo_change: i32, new_elo: i32, date: &str) -> Value {
        let (status, body) = self
            .post(
                "/api/elo",
                json!({
                    "userId": user_id,
                    "eloChange": elo_change,
                    "newElo": new_elo,
                    "date": date,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "record elo failed: {body}");
        body
    }

    pub async fn create_goal(&self, user_id: u64, title: &str, goal_type: &str) -> u64 {
        let (status, body) = self
            .post(
                "/api/goals",
                json!({ "userId": user_id, "title": title, "type": goal_type }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "create goal failed: {body}");
        body["id"].as_u64().unwrap()
    }

    pub async fn create_course(&self, user_id: u64, title: &str, total_lessons: u32) -> u64 {
        let (status, body) = self
            .post(
                "/api/courses",
                json!({ "userId": user_id, "title": title, "totalLessons": total_lessons }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "create course failed: {body}");
        body["id"].as_u64().unwrap()
    }
}
