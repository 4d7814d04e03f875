use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Social media post entity
///
/// `likes` is a denormalized counter maintained in the same transaction as
/// the `social_media_likes` rows it summarizes.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub post_text: String,
    pub post_image: String,
    pub likes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
