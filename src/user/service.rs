use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::{
    models::{NewUser, User},
    repository::UserRepository,
    types::{CreateUserRequest, UserPatch},
};
use crate::shared::AppError;

/// Service for user profile business logic
pub struct UserService {
    repository: Arc<dyn UserRepository + Send + Sync>,
    default_elo: i32,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository + Send + Sync>, default_elo: i32) -> Self {
        Self {
            repository,
            default_elo,
        }
    }

    /// Creates a user, filling in default ratings and settings
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<User, AppError> {
        self.ensure_username_free(&request.username, None).await?;

        let current_elo = request.current_elo.unwrap_or(self.default_elo);
        let new_user = NewUser {
            username: request.username,
            current_elo,
            peak_elo: request.peak_elo.unwrap_or(current_elo),
            profile_complete: request.profile_complete,
            settings: request.settings.unwrap_or_default(),
        };

        let user = self.repository.create_user(new_user).await?;
        info!(user_id = user.id, current_elo = user.current_elo, "User created");
        Ok(user)
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self, id: u64) -> Result<Option<User>, AppError> {
        self.repository.get_user(id).await
    }

    /// Applies a partial update; renaming onto another user's name is rejected
    #[instrument(skip(self, patch))]
    pub async fn update_user(&self, id: u64, patch: UserPatch) -> Result<Option<User>, AppError> {
        if let Some(username) = &patch.username {
            self.ensure_username_free(username, Some(id)).await?;
        }

        let updated = self.repository.update_user(id, patch).await?;
        match &updated {
            Some(user) => debug!(user_id = user.id, "User updated"),
            None => debug!(user_id = id, "User not found"),
        }
        Ok(updated)
    }

    async fn ensure_username_free(&self, username: &str, owner: Option<u64>) -> Result<(), AppError> {
        match self.repository.get_user_by_username(username).await? {
            Some(existing) if Some(existing.id) != owner => {
                warn!(username = %username, "Username already taken");
                Err(AppError::invalid_field("username", "Username is already taken"))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::repository::InMemoryUserRepository;

    fn service() -> UserService {
        UserService::new(Arc::new(InMemoryUserRepository::new()), 1200)
    }

    fn request(username: &str) -> CreateUserRequest {
        CreateUserRequest {
            username: username.to_string(),
            current_elo: None,
            peak_elo: None,
            profile_complete: false,
            settings: None,
        }
    }

    #[tokio::test]
    async fn test_defaults_applied() {
        let user = service().create_user(request("alice")).await.unwrap();
        assert_eq!(user.current_elo, 1200);
        assert_eq!(user.peak_elo, 1200);
        assert_eq!(user.settings.engine_depth, 15);
    }

    #[tokio::test]
    async fn test_peak_defaults_to_starting_rating() {
        let mut req = request("alice");
        req.current_elo = Some(1600);
        let user = service().create_user(req).await.unwrap();
        assert_eq!(user.peak_elo, 1600);
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let service = service();
        service.create_user(request("alice")).await.unwrap();

        let result = service.create_user(request("alice")).await;
        match result {
            Err(AppError::Validation { errors, .. }) => assert_eq!(errors[0].field, "username"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rename_to_own_name_allowed() {
        let service = service();
        let user = service.create_user(request("alice")).await.unwrap();
        service.create_user(request("bob")).await.unwrap();

        let same = UserPatch {
            username: Some("alice".to_string()),
            ..UserPatch::default()
        };
        assert!(service.update_user(user.id, same).await.unwrap().is_some());

        let taken = UserPatch {
            username: Some("bob".to_string()),
            ..UserPatch::default()
        };
        assert!(service.update_user(user.id, taken).await.is_err());
    }
}
