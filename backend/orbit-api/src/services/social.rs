/// Social service - comments and likes on posts
///
/// Like and unlike run in a transaction so the likes side table and the
/// post's denormalized counter never drift.
use crate::db::{comment_repo, like_repo, post_repo};
use crate::error::{AppError, Result};
use crate::models::{Comment, Like};
use crate::services::posts::clamp_limit_offset;
use sqlx::PgPool;
use uuid::Uuid;

/// Result of a like or unlike operation
#[derive(Debug)]
pub struct LikeOutcome {
    /// Whether this call changed anything (false on repeat like/unlike)
    pub changed: bool,
    /// Like count after the operation
    pub likes: i64,
}

pub struct SocialService {
    pool: PgPool,
}

impl SocialService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn ensure_post_exists(&self, post_id: Uuid) -> Result<()> {
        post_repo::find_post(&self.pool, post_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("post not found".to_string()))
    }

    /// Add a comment to a post
    pub async fn add_comment(
        &self,
        post_id: Uuid,
        user_id: Uuid,
        comment_text: &str,
    ) -> Result<Comment> {
        self.ensure_post_exists(post_id).await?;

        let comment =
            comment_repo::create_comment(&self.pool, post_id, user_id, comment_text).await?;

        tracing::info!(comment_id = %comment.comment_id, %post_id, %user_id, "Comment created");

        Ok(comment)
    }

    /// Paginated comments for a post, newest first, with the total count
    pub async fn get_post_comments(
        &self,
        post_id: Uuid,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<(Vec<Comment>, i64)> {
        self.ensure_post_exists(post_id).await?;

        let (limit, offset) = clamp_limit_offset(limit, offset);
        let comments =
            comment_repo::find_post_comments(&self.pool, post_id, limit, offset).await?;
        let count = comment_repo::count_post_comments(&self.pool, post_id).await?;

        Ok((comments, count))
    }

    /// Update a comment's text; author only
    pub async fn update_comment(
        &self,
        comment_id: Uuid,
        user_id: Uuid,
        comment_text: &str,
    ) -> Result<Comment> {
        comment_repo::update_comment(&self.pool, comment_id, user_id, comment_text)
            .await?
            .ok_or_else(|| AppError::NotFound("comment not found".to_string()))
    }

    /// Delete a comment; author only
    pub async fn delete_comment(&self, comment_id: Uuid, user_id: Uuid) -> Result<()> {
        if !comment_repo::delete_comment(&self.pool, comment_id, user_id).await? {
            return Err(AppError::NotFound("comment not found".to_string()));
        }

        tracing::info!(%comment_id, %user_id, "Comment deleted");

        Ok(())
    }

    /// Like a post; idempotent
    pub async fn like_post(&self, post_id: Uuid, user_id: Uuid) -> Result<LikeOutcome> {
        self.ensure_post_exists(post_id).await?;

        let mut tx = self.pool.begin().await?;

        let created = like_repo::insert_like(&mut tx, post_id, user_id).await?;
        let changed = created.is_some();
        if changed {
            post_repo::increment_likes(&mut tx, post_id).await?;
        }

        tx.commit().await?;

        if changed {
            tracing::info!(%post_id, %user_id, "Post liked");
        }

        let likes = like_repo::count_likes(&self.pool, post_id).await?;

        Ok(LikeOutcome { changed, likes })
    }

    /// Remove a like from a post; idempotent
    pub async fn unlike_post(&self, post_id: Uuid, user_id: Uuid) -> Result<LikeOutcome> {
        self.ensure_post_exists(post_id).await?;

        let mut tx = self.pool.begin().await?;

        let changed = like_repo::delete_like(&mut tx, post_id, user_id).await?;
        if changed {
            post_repo::decrement_likes(&mut tx, post_id).await?;
        }

        tx.commit().await?;

        if changed {
            tracing::info!(%post_id, %user_id, "Post unliked");
        }

        let likes = like_repo::count_likes(&self.pool, post_id).await?;

        Ok(LikeOutcome { changed, likes })
    }

    /// Paginated likes for a post, plus whether the caller liked it
    pub async fn get_post_likes(
        &self,
        post_id: Uuid,
        user_id: Uuid,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<(Vec<Like>, i64, bool)> {
        self.ensure_post_exists(post_id).await?;

        let (limit, offset) = clamp_limit_offset(limit, offset);
        let likes = like_repo::find_post_likes(&self.pool, post_id, limit, offset).await?;
        let count = like_repo::count_likes(&self.pool, post_id).await?;
        let liked_by_me = like_repo::user_has_liked(&self.pool, post_id, user_id).await?;

        Ok((likes, count, liked_by_me))
    }
}
