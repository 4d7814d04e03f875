/// Like handlers - HTTP endpoints for like operations
use crate::error::Result;
use crate::middleware::UserId;
use crate::models::Like;
use crate::services::SocialService;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Pagination query parameters for like listings
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Response for like/unlike actions
#[derive(Debug, Serialize)]
pub struct LikeActionResponse {
    /// False when the call was a repeat (already liked / already unliked)
    pub changed: bool,
    pub likes: i64,
}

/// Response for like listings
#[derive(Debug, Serialize)]
pub struct LikesResponse {
    pub likes: Vec<Like>,
    pub total_count: i64,
    pub liked_by_me: bool,
}

/// Like a post
pub async fn like_post(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let service = SocialService::new((**pool).clone());
    let outcome = service.like_post(*post_id, user_id.0).await?;

    Ok(HttpResponse::Ok().json(LikeActionResponse {
        changed: outcome.changed,
        likes: outcome.likes,
    }))
}

/// Remove a like from a post
pub async fn unlike_post(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let service = SocialService::new((**pool).clone());
    let outcome = service.unlike_post(*post_id, user_id.0).await?;

    Ok(HttpResponse::Ok().json(LikeActionResponse {
        changed: outcome.changed,
        likes: outcome.likes,
    }))
}

/// Get likes for a post
pub async fn get_post_likes(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    user_id: UserId,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    let service = SocialService::new((**pool).clone());
    let (likes, total_count, liked_by_me) = service
        .get_post_likes(*post_id, user_id.0, query.limit, query.offset)
        .await?;

    Ok(HttpResponse::Ok().json(LikesResponse {
        likes,
        total_count,
        liked_by_me,
    }))
}
