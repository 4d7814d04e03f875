use crate::error::Result;
use crate::models::Task;
use sqlx::PgPool;
use uuid::Uuid;

/// Create a new task for a user
pub async fn create_task(
    pool: &PgPool,
    user_id: Uuid,
    title: &str,
    description: Option<&str>,
    completed: bool,
) -> Result<Task> {
    let task = sqlx::query_as::<_, Task>(
        r#"
        INSERT INTO tasks (user_id, title, description, completed)
        VALUES ($1, $2, $3, $4)
        RETURNING id, user_id, title, description, completed, created_at, updated_at, deleted_at
        "#,
    )
    .bind(user_id)
    .bind(title)
    .bind(description)
    .bind(completed)
    .fetch_one(pool)
    .await?;

    Ok(task)
}

/// Find a task by ID, scoped to its owner (excluding soft-deleted tasks)
pub async fn find_task(pool: &PgPool, task_id: Uuid, user_id: Uuid) -> Result<Option<Task>> {
    let task = sqlx::query_as::<_, Task>(
        r#"
        SELECT id, user_id, title, description, completed, created_at, updated_at, deleted_at
        FROM tasks
        WHERE id = $1 AND user_id = $2 AND deleted_at IS NULL
        "#,
    )
    .bind(task_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(task)
}

/// Find all live tasks for a user, newest first
pub async fn find_tasks_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Task>> {
    let tasks = sqlx::query_as::<_, Task>(
        r#"
        SELECT id, user_id, title, description, completed, created_at, updated_at, deleted_at
        FROM tasks
        WHERE user_id = $1 AND deleted_at IS NULL
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(tasks)
}

/// Replace the mutable fields of a task owned by the user
pub async fn update_task(
    pool: &PgPool,
    task_id: Uuid,
    user_id: Uuid,
    title: &str,
    description: Option<&str>,
    completed: bool,
) -> Result<Option<Task>> {
    let task = sqlx::query_as::<_, Task>(
        r#"
        UPDATE tasks
        SET title = $3, description = $4, completed = $5, updated_at = NOW()
        WHERE id = $1 AND user_id = $2 AND deleted_at IS NULL
        RETURNING id, user_id, title, description, completed, created_at, updated_at, deleted_at
        "#,
    )
    .bind(task_id)
    .bind(user_id)
    .bind(title)
    .bind(description)
    .bind(completed)
    .fetch_optional(pool)
    .await?;

    Ok(task)
}

/// Soft delete a task owned by the user
pub async fn soft_delete_task(pool: &PgPool, task_id: Uuid, user_id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE tasks
        SET deleted_at = NOW(), updated_at = NOW()
        WHERE id = $1 AND user_id = $2 AND deleted_at IS NULL
        "#,
    )
    .bind(task_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
