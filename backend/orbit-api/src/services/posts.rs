/// Post service - feed CRUD plus the paginated listing and search paths
///
/// All page/sort/filter inputs are normalized here before they reach the
/// repository: page and limit are clamped, sort columns and search columns
/// are resolved through allow-lists, and page counts are computed from the
/// same predicate as the page fetch.
use crate::db::post_repo::{self, SearchColumn};
use crate::error::{AppError, Result};
use crate::middleware::permissions;
use crate::models::Post;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;
pub const DEFAULT_LIST_LIMIT: i64 = 20;

/// Normalized pagination input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl PageRequest {
    /// Clamp raw query input to sane bounds: page >= 1, 1 <= limit <= 100
    pub fn clamped(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = page.unwrap_or(1).max(1);

        let limit = match limit {
            Some(l) if l > MAX_PAGE_SIZE => MAX_PAGE_SIZE,
            Some(l) if l > 0 => l,
            _ => DEFAULT_PAGE_SIZE,
        };

        Self { page, limit }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }
}

/// ceil(count / limit); zero when nothing matched
pub fn total_pages(count: i64, limit: i64) -> i64 {
    (count + limit - 1) / limit
}

/// Clamp raw limit/offset input for offset-paginated side-table
/// listings: 1 <= limit <= 100, offset >= 0. Negative values must never
/// reach LIMIT/OFFSET, where PostgreSQL rejects them.
pub fn clamp_limit_offset(limit: Option<i64>, offset: Option<i64>) -> (i64, i64) {
    let limit = match limit {
        Some(l) if l > MAX_PAGE_SIZE => MAX_PAGE_SIZE,
        Some(l) if l > 0 => l,
        _ => DEFAULT_LIST_LIMIT,
    };

    (limit, offset.unwrap_or(0).max(0))
}

/// One page of the global feed
#[derive(Debug, Serialize)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub total_count: i64,
    pub current_page: i64,
    pub total_pages: i64,
}

/// One page of a filtered feed query, with both count views
#[derive(Debug, Serialize)]
pub struct FilteredPostPage {
    pub current_page: i64,
    pub filtered_count: i64,
    pub posts: Vec<Post>,
    pub total_count: i64,
    pub total_pages: i64,
}

pub struct PostService {
    pool: PgPool,
}

impl PostService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new post
    pub async fn create_post(
        &self,
        user_id: Uuid,
        post_text: &str,
        post_image: &str,
    ) -> Result<Post> {
        let post = post_repo::create_post(&self.pool, user_id, post_text, post_image).await?;

        tracing::info!(post_id = %post.post_id, %user_id, "Post created");

        Ok(post)
    }

    /// Get a post by ID
    pub async fn get_post(&self, post_id: Uuid) -> Result<Post> {
        post_repo::find_post(&self.pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("post not found".to_string()))
    }

    /// Get a post by ID, only if authored by the caller
    pub async fn get_post_for_user(&self, post_id: Uuid, user_id: Uuid) -> Result<Post> {
        post_repo::find_post_for_user(&self.pool, post_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("post not found".to_string()))
    }

    /// Get all posts authored by a user
    pub async fn get_user_posts(&self, user_id: Uuid) -> Result<Vec<Post>> {
        post_repo::find_posts_by_user(&self.pool, user_id).await
    }

    /// Replace the text and image of a post
    ///
    /// Scoped to the author at the query level: a foreign post reads as
    /// not-found, like the task path.
    pub async fn update_post(
        &self,
        post_id: Uuid,
        user_id: Uuid,
        post_text: &str,
        post_image: &str,
    ) -> Result<Post> {
        let updated =
            post_repo::update_post(&self.pool, post_id, user_id, post_text, post_image)
                .await?
                .ok_or_else(|| AppError::NotFound("post not found".to_string()))?;

        tracing::info!(%post_id, %user_id, "Post updated");

        Ok(updated)
    }

    /// Delete a post; author only. Comments and likes cascade.
    pub async fn delete_post(&self, post_id: Uuid, user_id: Uuid) -> Result<()> {
        let existing = self.get_post(post_id).await?;
        permissions::check_post_deletion(user_id, &existing)?;

        if !post_repo::delete_post(&self.pool, post_id).await? {
            return Err(AppError::NotFound("post not found".to_string()));
        }

        tracing::info!(%post_id, %user_id, "Post deleted");

        Ok(())
    }

    /// One page of the global feed with pagination and sorting
    pub async fn list_page(
        &self,
        page: Option<i64>,
        limit: Option<i64>,
        sort_by: &str,
        sort_order: &str,
    ) -> Result<PostPage> {
        let request = PageRequest::clamped(page, limit);

        let total_count = post_repo::count_posts(&self.pool).await?;
        let posts = post_repo::fetch_post_page(
            &self.pool,
            sort_by,
            sort_order,
            request.limit,
            request.offset(),
        )
        .await?;

        Ok(PostPage {
            posts,
            total_count,
            current_page: request.page,
            total_pages: total_pages(total_count, request.limit),
        })
    }

    /// The search path: paginated, sorted, optionally filtered by one
    /// allow-listed column
    ///
    /// The filter applies only when both `colname` and `searchtext` are
    /// non-empty; a `colname` outside the allow-list is rejected rather
    /// than silently ignored.
    pub async fn query(
        &self,
        page: Option<i64>,
        limit: Option<i64>,
        colname: Option<&str>,
        searchtext: Option<&str>,
        sort_by: &str,
        sort_order: &str,
    ) -> Result<FilteredPostPage> {
        let request = PageRequest::clamped(page, limit);

        let filter = match (colname, searchtext) {
            (Some(col), Some(term)) if !col.is_empty() && !term.is_empty() => {
                let column = SearchColumn::from_name(col).ok_or_else(|| {
                    AppError::Validation(format!("colname '{}' is not searchable", col))
                })?;
                Some((column, term))
            }
            _ => None,
        };

        let total_count = post_repo::count_posts(&self.pool).await?;

        let (filtered_count, posts) = match filter {
            Some((column, term)) => {
                let count = post_repo::count_posts_matching(&self.pool, column, term).await?;
                let posts = post_repo::fetch_posts_matching(
                    &self.pool,
                    column,
                    term,
                    sort_by,
                    sort_order,
                    request.limit,
                    request.offset(),
                )
                .await?;
                (count, posts)
            }
            None => {
                let posts = post_repo::fetch_post_page(
                    &self.pool,
                    sort_by,
                    sort_order,
                    request.limit,
                    request.offset(),
                )
                .await?;
                (total_count, posts)
            }
        };

        Ok(FilteredPostPage {
            current_page: request.page,
            filtered_count,
            posts,
            total_count,
            total_pages: total_pages(filtered_count, request.limit),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_page_and_limit() {
        assert_eq!(
            PageRequest::clamped(None, None),
            PageRequest { page: 1, limit: 10 }
        );
        assert_eq!(
            PageRequest::clamped(Some(0), Some(0)),
            PageRequest { page: 1, limit: 10 }
        );
        assert_eq!(
            PageRequest::clamped(Some(-3), Some(-5)),
            PageRequest { page: 1, limit: 10 }
        );
        assert_eq!(
            PageRequest::clamped(Some(7), Some(25)),
            PageRequest { page: 7, limit: 25 }
        );
        assert_eq!(
            PageRequest::clamped(Some(2), Some(5000)),
            PageRequest { page: 2, limit: 100 }
        );
    }

    #[test]
    fn offset_is_zero_based() {
        assert_eq!(PageRequest { page: 1, limit: 10 }.offset(), 0);
        assert_eq!(PageRequest { page: 3, limit: 10 }.offset(), 20);
        assert_eq!(PageRequest { page: 5, limit: 7 }.offset(), 28);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(101, 10), 11);
    }

    #[test]
    fn clamps_list_limit_and_offset() {
        assert_eq!(clamp_limit_offset(None, None), (20, 0));
        assert_eq!(clamp_limit_offset(Some(50), Some(10)), (50, 10));
        assert_eq!(clamp_limit_offset(Some(0), Some(-1)), (20, 0));
        assert_eq!(clamp_limit_offset(Some(-5), Some(-20)), (20, 0));
        assert_eq!(clamp_limit_offset(Some(5000), None), (100, 0));
    }
}
