/// User service - read-only identity lookups
use crate::db::user_repo;
use crate::error::{AppError, Result};
use crate::models::{User, UserProfile};
use sqlx::PgPool;
use uuid::Uuid;

pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The authenticated user's own row
    ///
    /// A valid token for a since-deleted user resolves to NotFound.
    pub async fn current_user(&self, user_id: Uuid) -> Result<User> {
        user_repo::find_by_id(&self.pool, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("user not found".to_string()))
    }

    /// Public profile of any user
    pub async fn get_profile(&self, user_id: Uuid) -> Result<UserProfile> {
        user_repo::find_profile(&self.pool, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("user not found".to_string()))
    }
}
