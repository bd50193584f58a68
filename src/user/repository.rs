use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;
use tracing::{debug, info, instrument};

use super::{
    models::{NewUser, User},
    types::UserPatch,
};
use crate::shared::AppError;
use crate::table::{lock, Table};

/// Trait for user repository operations
#[async_trait]
pub trait UserRepository {
    async fn create_user(&self, user: NewUser) -> Result<User, AppError>;
    async fn get_user(&self, id: u64) -> Result<Option<User>, AppError>;
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
    async fn update_user(&self, id: u64, patch: UserPatch) -> Result<Option<User>, AppError>;

    /// Atomically applies a signed rating change to the user's current and
    /// peak rating. Returns `None` if the user does not exist.
    async fn apply_elo_change(&self, id: u64, delta: i32) -> Result<Option<User>, AppError>;
}

/// In-memory implementation of UserRepository
///
/// Usernames are not checked for uniqueness here; callers look them up first.
pub struct InMemoryUserRepository {
    users: Mutex<Table<User>>,
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Table::new()),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    #[instrument(skip(self, user), fields(username = %user.username))]
    async fn create_user(&self, user: NewUser) -> Result<User, AppError> {
        let mut users = lock(&self.users, "users")?;
        let created = users.insert_with(|id| user.into_user(id, Utc::now())).clone();

        debug!(user_id = created.id, "User stored in memory");
        Ok(created)
    }

    #[instrument(skip(self))]
    async fn get_user(&self, id: u64) -> Result<Option<User>, AppError> {
        let users = lock(&self.users, "users")?;
        Ok(users.get(id).cloned())
    }

    #[instrument(skip(self))]
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let users = lock(&self.users, "users")?;
        let found = users.values().find(|u| u.username == username).cloned();
        Ok(found)
    }

    #[instrument(skip(self, patch))]
    async fn update_user(&self, id: u64, patch: UserPatch) -> Result<Option<User>, AppError> {
        let mut users = lock(&self.users, "users")?;
        let Some(user) = users.get_mut(id) else {
            debug!(user_id = id, "User not found for update");
            return Ok(None);
        };

        patch.apply_to(user);
        Ok(Some(user.clone()))
    }

    #[instrument(skip(self))]
    async fn apply_elo_change(&self, id: u64, delta: i32) -> Result<Option<User>, AppError> {
        let mut users = lock(&self.users, "users")?;
        let Some(user) = users.get_mut(id) else {
            return Ok(None);
        };

        user.apply_elo_change(delta);
        info!(
            user_id = id,
            delta,
            current_elo = user.current_elo,
            peak_elo = user.peak_elo,
            "Applied rating change"
        );
        Ok(Some(user.clone()))
    }
}
