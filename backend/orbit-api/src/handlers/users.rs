/// User handlers - read-only identity endpoints
use crate::error::Result;
use crate::middleware::UserId;
use crate::services::UserService;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

/// Get the authenticated user's own record
pub async fn get_current_user(pool: web::Data<PgPool>, user_id: UserId) -> Result<HttpResponse> {
    let service = UserService::new((**pool).clone());
    let user = service.current_user(user_id.0).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// Get the public profile of any user
pub async fn get_user_profile(
    pool: web::Data<PgPool>,
    user_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = UserService::new((**pool).clone());
    let profile = service.get_profile(*user_id).await?;

    Ok(HttpResponse::Ok().json(profile))
}
