use crate::error::Result;
use crate::models::Post;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

const POST_COLUMNS: &str =
    "post_id, user_id, post_text, post_image, likes, created_at, updated_at";

/// Searchable post columns
///
/// `colname` query input is resolved into this enum before any SQL is
/// built; unknown names never reach the query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchColumn {
    PostText,
    PostImage,
}

impl SearchColumn {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "post_text" => Some(SearchColumn::PostText),
            "post_image" => Some(SearchColumn::PostImage),
            _ => None,
        }
    }
}

/// Resolve sort inputs to column/direction tokens safe to interpolate
/// into ORDER BY. Unknown values fall back to `created_at DESC`.
pub fn sort_clause(sort_by: &str, sort_order: &str) -> (&'static str, &'static str) {
    let column = match sort_by.to_lowercase().as_str() {
        "updated_at" => "updated_at",
        "likes" => "likes",
        "post_text" => "post_text",
        _ => "created_at",
    };

    let order = match sort_order.to_lowercase().as_str() {
        "asc" => "ASC",
        _ => "DESC",
    };

    (column, order)
}

/// Create a new post
pub async fn create_post(
    pool: &PgPool,
    user_id: Uuid,
    post_text: &str,
    post_image: &str,
) -> Result<Post> {
    let post = sqlx::query_as::<_, Post>(&format!(
        r#"
        INSERT INTO social_media_posts (user_id, post_text, post_image)
        VALUES ($1, $2, $3)
        RETURNING {POST_COLUMNS}
        "#,
    ))
    .bind(user_id)
    .bind(post_text)
    .bind(post_image)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Find a post by ID
pub async fn find_post(pool: &PgPool, post_id: Uuid) -> Result<Option<Post>> {
    let post = sqlx::query_as::<_, Post>(&format!(
        "SELECT {POST_COLUMNS} FROM social_media_posts WHERE post_id = $1",
    ))
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Find a post by ID and author
pub async fn find_post_for_user(
    pool: &PgPool,
    post_id: Uuid,
    user_id: Uuid,
) -> Result<Option<Post>> {
    let post = sqlx::query_as::<_, Post>(&format!(
        "SELECT {POST_COLUMNS} FROM social_media_posts WHERE post_id = $1 AND user_id = $2",
    ))
    .bind(post_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Find all posts authored by a user, newest first
pub async fn find_posts_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Post>> {
    let posts = sqlx::query_as::<_, Post>(&format!(
        r#"
        SELECT {POST_COLUMNS}
        FROM social_media_posts
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Replace the text and image of a post, scoped to its author
pub async fn update_post(
    pool: &PgPool,
    post_id: Uuid,
    user_id: Uuid,
    post_text: &str,
    post_image: &str,
) -> Result<Option<Post>> {
    let post = sqlx::query_as::<_, Post>(&format!(
        r#"
        UPDATE social_media_posts
        SET post_text = $3, post_image = $4, updated_at = NOW()
        WHERE post_id = $1 AND user_id = $2
        RETURNING {POST_COLUMNS}
        "#,
    ))
    .bind(post_id)
    .bind(user_id)
    .bind(post_text)
    .bind(post_image)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Hard delete a post; comments and likes go with it via FK cascade
pub async fn delete_post(pool: &PgPool, post_id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM social_media_posts WHERE post_id = $1")
        .bind(post_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Count all posts
pub async fn count_posts(pool: &PgPool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(post_id) FROM social_media_posts")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

/// Fetch one page of posts, sorted by an allow-listed column
pub async fn fetch_post_page(
    pool: &PgPool,
    sort_by: &str,
    sort_order: &str,
    limit: i64,
    offset: i64,
) -> Result<Vec<Post>> {
    let (column, order) = sort_clause(sort_by, sort_order);

    let query = format!(
        r#"
        SELECT {POST_COLUMNS}
        FROM social_media_posts
        ORDER BY {column} {order}
        LIMIT $1 OFFSET $2
        "#,
    );

    let posts = sqlx::query_as::<_, Post>(&query)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

    Ok(posts)
}

/// Count posts matching a search term on an allow-listed column
///
/// `post_text` matches either as full text (stemmed, via websearch syntax)
/// or as a substring; other columns are substring-only.
pub async fn count_posts_matching(
    pool: &PgPool,
    column: SearchColumn,
    term: &str,
) -> Result<i64> {
    let pattern = format!("%{}%", term);

    let count: i64 = match column {
        SearchColumn::PostText => {
            sqlx::query_scalar(
                r#"
                SELECT COUNT(post_id)
                FROM social_media_posts
                WHERE post_text ILIKE $1
                   OR to_tsvector('english', post_text) @@ websearch_to_tsquery('english', $2)
                "#,
            )
            .bind(&pattern)
            .bind(term)
            .fetch_one(pool)
            .await?
        }
        SearchColumn::PostImage => {
            sqlx::query_scalar("SELECT COUNT(post_id) FROM social_media_posts WHERE post_image ILIKE $1")
                .bind(&pattern)
                .fetch_one(pool)
                .await?
        }
    };

    Ok(count)
}

/// Fetch one page of posts matching a search term, sorted by an
/// allow-listed column
pub async fn fetch_posts_matching(
    pool: &PgPool,
    column: SearchColumn,
    term: &str,
    sort_by: &str,
    sort_order: &str,
    limit: i64,
    offset: i64,
) -> Result<Vec<Post>> {
    let (sort_column, order) = sort_clause(sort_by, sort_order);
    let pattern = format!("%{}%", term);

    let posts = match column {
        SearchColumn::PostText => {
            let query = format!(
                r#"
                SELECT {POST_COLUMNS}
                FROM social_media_posts
                WHERE post_text ILIKE $1
                   OR to_tsvector('english', post_text) @@ websearch_to_tsquery('english', $2)
                ORDER BY {sort_column} {order}
                LIMIT $3 OFFSET $4
                "#,
            );

            sqlx::query_as::<_, Post>(&query)
                .bind(&pattern)
                .bind(term)
                .bind(limit)
                .bind(offset)
                .fetch_all(pool)
                .await?
        }
        SearchColumn::PostImage => {
            let query = format!(
                r#"
                SELECT {POST_COLUMNS}
                FROM social_media_posts
                WHERE post_image ILIKE $1
                ORDER BY {sort_column} {order}
                LIMIT $2 OFFSET $3
                "#,
            );

            sqlx::query_as::<_, Post>(&query)
                .bind(&pattern)
                .bind(limit)
                .bind(offset)
                .fetch_all(pool)
                .await?
        }
    };

    Ok(posts)
}

/// Increment the denormalized like counter
pub async fn increment_likes(tx: &mut Transaction<'_, Postgres>, post_id: Uuid) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE social_media_posts
        SET likes = likes + 1, updated_at = NOW()
        WHERE post_id = $1
        "#,
    )
    .bind(post_id)
    .execute(tx.as_mut())
    .await?;

    Ok(())
}

/// Decrement the denormalized like counter, never below zero
pub async fn decrement_likes(tx: &mut Transaction<'_, Postgres>, post_id: Uuid) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE social_media_posts
        SET likes = GREATEST(likes - 1, 0), updated_at = NOW()
        WHERE post_id = $1
        "#,
    )
    .bind(post_id)
    .execute(tx.as_mut())
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_clause_allows_known_columns() {
        assert_eq!(sort_clause("likes", "asc"), ("likes", "ASC"));
        assert_eq!(sort_clause("updated_at", "desc"), ("updated_at", "DESC"));
        assert_eq!(sort_clause("post_text", "ASC"), ("post_text", "ASC"));
    }

    #[test]
    fn sort_clause_defaults_unknown_input() {
        assert_eq!(sort_clause("", ""), ("created_at", "DESC"));
        assert_eq!(
            sort_clause("likes; DROP TABLE social_media_posts", "asc"),
            ("created_at", "ASC")
        );
        assert_eq!(sort_clause("created_at", "sideways"), ("created_at", "DESC"));
    }

    #[test]
    fn search_column_rejects_unknown_names() {
        assert_eq!(SearchColumn::from_name("post_text"), Some(SearchColumn::PostText));
        assert_eq!(SearchColumn::from_name("post_image"), Some(SearchColumn::PostImage));
        assert_eq!(SearchColumn::from_name("user_id"), None);
        assert_eq!(SearchColumn::from_name("post_text OR 1=1"), None);
    }
}
