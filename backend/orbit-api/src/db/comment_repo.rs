use crate::error::Result;
use crate::models::Comment;
use sqlx::PgPool;
use uuid::Uuid;

/// Create a new comment on a post
pub async fn create_comment(
    pool: &PgPool,
    post_id: Uuid,
    user_id: Uuid,
    comment_text: &str,
) -> Result<Comment> {
    let comment = sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO social_media_comments (post_id, user_id, comment_text)
        VALUES ($1, $2, $3)
        RETURNING comment_id, post_id, user_id, comment_text, created_at, updated_at
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .bind(comment_text)
    .fetch_one(pool)
    .await?;

    Ok(comment)
}

/// Get paginated comments for a post, newest first
pub async fn find_post_comments(
    pool: &PgPool,
    post_id: Uuid,
    limit: i64,
    offset: i64,
) -> Result<Vec<Comment>> {
    let comments = sqlx::query_as::<_, Comment>(
        r#"
        SELECT comment_id, post_id, user_id, comment_text, created_at, updated_at
        FROM social_media_comments
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

    Ok(comments)
}

/// Count comments on a post
pub async fn count_post_comments(pool: &PgPool, post_id: Uuid) -> Result<i64> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM social_media_comments WHERE post_id = $1",
    )
    .bind(post_id)
    .fetch_one(pool)
    .await?;

    Ok(count)
}

/// Update a comment's text, scoped to its author
pub async fn update_comment(
    pool: &PgPool,
    comment_id: Uuid,
    user_id: Uuid,
    comment_text: &str,
) -> Result<Option<Comment>> {
    let comment = sqlx::query_as::<_, Comment>(
        r#"
        UPDATE social_media_comments
        SET comment_text = $3, updated_at = NOW()
        WHERE comment_id = $1 AND user_id = $2
        RETURNING comment_id, post_id, user_id, comment_text, created_at, updated_at
        "#,
    )
    .bind(comment_id)
    .bind(user_id)
    .bind(comment_text)
    .fetch_optional(pool)
    .await?;

    Ok(comment)
}

/// Delete a comment, scoped to its author
pub async fn delete_comment(pool: &PgPool, comment_id: Uuid, user_id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        "DELETE FROM social_media_comments WHERE comment_id = $1 AND user_id = $2",
    )
    .bind(comment_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
