use crate::error::Result;
use crate::models::Like;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

/// Insert a like for (post, user)
///
/// Idempotent: returns `None` when the like already existed, so callers
/// can skip the counter update.
pub async fn insert_like(
    tx: &mut Transaction<'_, Postgres>,
    post_id: Uuid,
    user_id: Uuid,
) -> Result<Option<Like>> {
    let like = sqlx::query_as::<_, Like>(
        r#"
        INSERT INTO social_media_likes (post_id, user_id)
        VALUES ($1, $2)
        ON CONFLICT (post_id, user_id) DO NOTHING
        RETURNING like_id, post_id, user_id, created_at, updated_at
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .fetch_optional(tx.as_mut())
    .await?;

    Ok(like)
}

/// Delete a like for (post, user); idempotent
pub async fn delete_like(
    tx: &mut Transaction<'_, Postgres>,
    post_id: Uuid,
    user_id: Uuid,
) -> Result<bool> {
    let result = sqlx::query(
        "DELETE FROM social_media_likes WHERE post_id = $1 AND user_id = $2",
    )
    .bind(post_id)
    .bind(user_id)
    .execute(tx.as_mut())
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Check whether a user has liked a post
pub async fn user_has_liked(pool: &PgPool, post_id: Uuid, user_id: Uuid) -> Result<bool> {
    let exists: bool = sqlx::query_scalar(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM social_media_likes
            WHERE post_id = $1 AND user_id = $2
        )
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(exists)
}

/// Count likes on a post
pub async fn count_likes(pool: &PgPool, post_id: Uuid) -> Result<i64> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM social_media_likes WHERE post_id = $1")
            .bind(post_id)
            .fetch_one(pool)
            .await?;

    Ok(count)
}

/// Get paginated likes for a post, newest first
pub async fn find_post_likes(
    pool: &PgPool,
    post_id: Uuid,
    limit: i64,
    offset: i64,
) -> Result<Vec<Like>> {
    let likes = sqlx::query_as::<_, Like>(
        r#"
        SELECT like_id, post_id, user_id, created_at, updated_at
        FROM social_media_likes
        WHERE post_id = $1
        ORDER BY created_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(post_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(likes)
}
