/// Task handlers - HTTP endpoints for per-user task operations
use crate::error::Result;
use crate::middleware::UserId;
use crate::services::TaskService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// Request body for creating a task
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Request body for updating a task (full replace of mutable fields)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Get all tasks for the authenticated user
pub async fn list_tasks(pool: web::Data<PgPool>, user_id: UserId) -> Result<HttpResponse> {
    let service = TaskService::new((**pool).clone());
    let tasks = service.list_tasks(user_id.0).await?;

    Ok(HttpResponse::Ok().json(tasks))
}

/// Get a task by ID
pub async fn get_task(
    pool: web::Data<PgPool>,
    task_id: web::Path<Uuid>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let service = TaskService::new((**pool).clone());
    let task = service.get_task(*task_id, user_id.0).await?;

    Ok(HttpResponse::Ok().json(task))
}

/// Create a new task
pub async fn create_task(
    pool: web::Data<PgPool>,
    user_id: UserId,
    req: web::Json<CreateTaskRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let service = TaskService::new((**pool).clone());
    let task = service
        .create_task(
            user_id.0,
            &req.title,
            req.description.as_deref(),
            req.completed,
        )
        .await?;

    Ok(HttpResponse::Created().json(task))
}

/// Update an existing task
pub async fn update_task(
    pool: web::Data<PgPool>,
    task_id: web::Path<Uuid>,
    user_id: UserId,
    req: web::Json<UpdateTaskRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let service = TaskService::new((**pool).clone());
    let task = service
        .update_task(
            *task_id,
            user_id.0,
            &req.title,
            req.description.as_deref(),
            req.completed,
        )
        .await?;

    Ok(HttpResponse::Ok().json(task))
}

/// Delete a task
pub async fn delete_task(
    pool: web::Data<PgPool>,
    task_id: web::Path<Uuid>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let service = TaskService::new((**pool).clone());
    service.delete_task(*task_id, user_id.0).await?;

    Ok(HttpResponse::NoContent().finish())
}
