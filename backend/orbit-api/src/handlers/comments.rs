/// Comment handlers - HTTP endpoints for comment operations
use crate::error::Result;
use crate::middleware::UserId;
use crate::models::Comment;
use crate::services::SocialService;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// Pagination query parameters for comment listings
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Request body for creating a comment
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 2000))]
    pub comment_text: String,
}

/// Request body for updating a comment
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, max = 2000))]
    pub comment_text: String,
}

/// Response for comment listings
#[derive(Debug, Serialize)]
pub struct CommentsResponse {
    pub comments: Vec<Comment>,
    pub total_count: i64,
}

/// Create a new comment on a post
pub async fn create_comment(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    user_id: UserId,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let service = SocialService::new((**pool).clone());
    let comment = service
        .add_comment(*post_id, user_id.0, &req.comment_text)
        .await?;

    Ok(HttpResponse::Created().json(comment))
}

/// Get comments for a post
pub async fn get_post_comments(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    let service = SocialService::new((**pool).clone());
    let (comments, total_count) = service
        .get_post_comments(*post_id, query.limit, query.offset)
        .await?;

    Ok(HttpResponse::Ok().json(CommentsResponse {
        comments,
        total_count,
    }))
}

/// Update a comment
pub async fn update_comment(
    pool: web::Data<PgPool>,
    comment_id: web::Path<Uuid>,
    user_id: UserId,
    req: web::Json<UpdateCommentRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let service = SocialService::new((**pool).clone());
    let comment = service
        .update_comment(*comment_id, user_id.0, &req.comment_text)
        .await?;

    Ok(HttpResponse::Ok().json(comment))
}

/// Delete a comment
pub async fn delete_comment(
    pool: web::Data<PgPool>,
    comment_id: web::Path<Uuid>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let service = SocialService::new((**pool).clone());
    service.delete_comment(*comment_id, user_id.0).await?;

    Ok(HttpResponse::NoContent().finish())
}
