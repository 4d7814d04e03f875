/// Task service - per-user task CRUD
///
/// Every operation is scoped to the authenticated user; a task belonging to
/// someone else is indistinguishable from a missing one.
use crate::db::task_repo;
use crate::error::{AppError, Result};
use crate::models::Task;
use sqlx::PgPool;
use uuid::Uuid;

pub struct TaskService {
    pool: PgPool,
}

impl TaskService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get all live tasks for a user
    pub async fn list_tasks(&self, user_id: Uuid) -> Result<Vec<Task>> {
        task_repo::find_tasks_by_user(&self.pool, user_id).await
    }

    /// Get a task by ID
    pub async fn get_task(&self, task_id: Uuid, user_id: Uuid) -> Result<Task> {
        task_repo::find_task(&self.pool, task_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("task not found".to_string()))
    }

    /// Create a new task
    pub async fn create_task(
        &self,
        user_id: Uuid,
        title: &str,
        description: Option<&str>,
        completed: bool,
    ) -> Result<Task> {
        let task =
            task_repo::create_task(&self.pool, user_id, title, description, completed).await?;

        tracing::info!(task_id = %task.id, %user_id, "Task created");

        Ok(task)
    }

    /// Replace the mutable fields of an existing task
    pub async fn update_task(
        &self,
        task_id: Uuid,
        user_id: Uuid,
        title: &str,
        description: Option<&str>,
        completed: bool,
    ) -> Result<Task> {
        let task =
            task_repo::update_task(&self.pool, task_id, user_id, title, description, completed)
                .await?
                .ok_or_else(|| AppError::NotFound("task not found".to_string()))?;

        tracing::info!(%task_id, %user_id, "Task updated");

        Ok(task)
    }

    /// Soft delete a task
    pub async fn delete_task(&self, task_id: Uuid, user_id: Uuid) -> Result<()> {
        if !task_repo::soft_delete_task(&self.pool, task_id, user_id).await? {
            return Err(AppError::NotFound("task not found".to_string()));
        }

        tracing::info!(%task_id, %user_id, "Task deleted");

        Ok(())
    }
}
