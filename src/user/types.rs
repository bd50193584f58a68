use serde::Deserialize;
use validator::Validate;

use super::models::{User, UserSettings};

/// Request payload for creating a user
///
/// Unknown fields (such as a client-supplied `id`) are ignored.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 64, message = "Username must be 1-64 characters"))]
    pub username: String,
    pub current_elo: Option<i32>,
    pub peak_elo: Option<i32>,
    #[serde(default)]
    pub profile_complete: bool,
    pub settings: Option<UserSettings>,
}

/// Partial update for a user; every mutable field is optional
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserPatch {
    #[validate(length(min = 1, max = 64, message = "Username must be 1-64 characters"))]
    pub username: Option<String>,
    pub current_elo: Option<i32>,
    pub peak_elo: Option<i32>,
    pub profile_complete: Option<bool>,
    pub settings: Option<UserSettings>,
}

impl UserPatch {
    /// Shallow-merges the present fields into `user`
    pub fn apply_to(self, user: &mut User) {
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(current_elo) = self.current_elo {
            user.current_elo = current_elo;
        }
        if let Some(peak_elo) = self.peak_elo {
            user.peak_elo = peak_elo;
        }
        if let Some(profile_complete) = self.profile_complete {
            user.profile_complete = profile_complete;
        }
        if let Some(settings) = self.settings {
            user.settings = settings;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_rejects_unknown_fields() {
        let result: Result<UserPatch, _> = serde_json::from_str(r#"{"id": 4}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_ignores_client_id() {
        let request: CreateUserRequest =
            serde_json::from_str(r#"{"id": 1, "username": "hikaru", "currentElo": 1500}"#).unwrap();
        assert_eq!(request.username, "hikaru");
        assert_eq!(request.current_elo, Some(1500));
        assert!(request.settings.is_none());
    }

    #[test]
    fn test_empty_username_fails_validation() {
        let request: CreateUserRequest = serde_json::from_str(r#"{"username": ""}"#).unwrap();
        assert!(request.validate().is_err());
    }
}
