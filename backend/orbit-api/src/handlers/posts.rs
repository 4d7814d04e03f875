/// Post handlers - HTTP endpoints for feed operations
use crate::error::{AppError, Result};
use crate::middleware::UserId;
use crate::services::PostService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

const DEFAULT_SORT_BY: &str = "created_at";
const DEFAULT_SORT_ORDER: &str = "desc";

/// Request body for creating a post
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 10000))]
    pub post_text: String,
    pub post_image: Option<String>,
}

/// Request body for updating a post
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 10000))]
    pub post_text: String,
    pub post_image: Option<String>,
}

/// Query parameters for the post search endpoint
///
/// `page` and `limit` that fail integer parsing are rejected by the Query
/// extractor before this struct exists.
#[derive(Debug, Deserialize)]
pub struct QueryPostsParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub colname: Option<String>,
    pub searchtext: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// Query posts with pagination, sorting, and one filtered search column
///
/// `GET /api/v1/posts?page=1&limit=10&colname=post_text&searchtext=tea&sort_by=created_at&sort_order=desc`
pub async fn query_posts(
    pool: web::Data<PgPool>,
    query: web::Query<QueryPostsParams>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let page = service
        .query(
            query.page,
            query.limit,
            query.colname.as_deref(),
            query.searchtext.as_deref(),
            query.sort_by.as_deref().unwrap_or(DEFAULT_SORT_BY),
            query.sort_order.as_deref().unwrap_or(DEFAULT_SORT_ORDER),
        )
        .await?;

    Ok(HttpResponse::Ok().json(page))
}

fn parse_page_param(value: &str, name: &str) -> Result<i64> {
    value
        .parse::<i64>()
        .map_err(|_| AppError::BadRequest(format!("Invalid {} parameter", name)))
}

/// Get one page of the feed: `GET /api/v1/posts/page/{page}/{limit}`
pub async fn get_posts_page(
    pool: web::Data<PgPool>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse> {
    let (page_num, page_limit) = path.into_inner();
    let page = parse_page_param(&page_num, "page number")?;
    let limit = parse_page_param(&page_limit, "page limit")?;

    let service = PostService::new((**pool).clone());
    let response = service
        .list_page(Some(page), Some(limit), DEFAULT_SORT_BY, DEFAULT_SORT_ORDER)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// Get one sorted page of the feed:
/// `GET /api/v1/posts/page/{page}/{limit}/{sort_by}/{sort_order}`
pub async fn get_posts_page_sorted(
    pool: web::Data<PgPool>,
    path: web::Path<(String, String, String, String)>,
) -> Result<HttpResponse> {
    let (page_num, page_limit, sort_by, sort_order) = path.into_inner();
    let page = parse_page_param(&page_num, "page number")?;
    let limit = parse_page_param(&page_limit, "page limit")?;

    let service = PostService::new((**pool).clone());
    let response = service
        .list_page(Some(page), Some(limit), &sort_by, &sort_order)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// Create a new post
pub async fn create_post(
    pool: web::Data<PgPool>,
    user_id: UserId,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let service = PostService::new((**pool).clone());
    let post = service
        .create_post(
            user_id.0,
            &req.post_text,
            req.post_image.as_deref().unwrap_or(""),
        )
        .await?;

    Ok(HttpResponse::Created().json(post))
}

/// Get a post by ID
pub async fn get_post(pool: web::Data<PgPool>, post_id: web::Path<Uuid>) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let post = service.get_post(*post_id).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// Get a post by ID, only if the caller is its author
pub async fn get_post_for_user(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let post = service.get_post_for_user(*post_id, user_id.0).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// Get all posts authored by a user
pub async fn get_user_posts(
    pool: web::Data<PgPool>,
    user_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let posts = service.get_user_posts(*user_id).await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Update a post
pub async fn update_post(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    user_id: UserId,
    req: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let service = PostService::new((**pool).clone());
    let post = service
        .update_post(
            *post_id,
            user_id.0,
            &req.post_text,
            req.post_image.as_deref().unwrap_or(""),
        )
        .await?;

    Ok(HttpResponse::Ok().json(post))
}

/// Delete a post
pub async fn delete_post(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    service.delete_post(*post_id, user_id.0).await?;

    Ok(HttpResponse::NoContent().finish())
}
