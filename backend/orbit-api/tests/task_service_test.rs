//! Integration Tests: Task Service
//!
//! Exercises the task CRUD contract against a real database:
//! - Create then fetch returns the same data
//! - Update replaces the mutable fields
//! - Delete then fetch is not-found
//! - Tasks are invisible to other users

mod common;

use common::{create_test_user, setup_test_db};
use orbit_api::error::AppError;
use orbit_api::services::TaskService;

#[tokio::test]
async fn create_then_fetch_returns_same_data() {
    let pool = setup_test_db().await.expect("db setup");
    let user_id = create_test_user(&pool).await;
    let service = TaskService::new(pool);

    let created = service
        .create_task(user_id, "Buy milk", Some("2 liters, whole"), false)
        .await
        .expect("create task");

    let fetched = service.get_task(created.id, user_id).await.expect("fetch");

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.title, "Buy milk");
    assert_eq!(fetched.description.as_deref(), Some("2 liters, whole"));
    assert!(!fetched.completed);
    assert_eq!(fetched.user_id, user_id);
}

#[tokio::test]
async fn update_replaces_mutable_fields() {
    let pool = setup_test_db().await.expect("db setup");
    let user_id = create_test_user(&pool).await;
    let service = TaskService::new(pool);

    let created = service
        .create_task(user_id, "Draft report", None, false)
        .await
        .expect("create task");

    let updated = service
        .update_task(created.id, user_id, "Send report", Some("to finance"), true)
        .await
        .expect("update task");

    assert_eq!(updated.title, "Send report");
    assert_eq!(updated.description.as_deref(), Some("to finance"));
    assert!(updated.completed);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn delete_then_fetch_is_not_found() {
    let pool = setup_test_db().await.expect("db setup");
    let user_id = create_test_user(&pool).await;
    let service = TaskService::new(pool);

    let created = service
        .create_task(user_id, "Throwaway", None, false)
        .await
        .expect("create task");

    service
        .delete_task(created.id, user_id)
        .await
        .expect("delete task");

    let err = service.get_task(created.id, user_id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    // Deleting again is also not-found
    let err = service.delete_task(created.id, user_id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn tasks_are_scoped_per_user() {
    let pool = setup_test_db().await.expect("db setup");
    let alice = create_test_user(&pool).await;
    let bob = create_test_user(&pool).await;
    let service = TaskService::new(pool);

    let task = service
        .create_task(alice, "Alice's secret", None, false)
        .await
        .expect("create task");

    let err = service.get_task(task.id, bob).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    assert!(service.list_tasks(bob).await.expect("list").is_empty());
    assert_eq!(service.list_tasks(alice).await.expect("list").len(), 1);
}

#[tokio::test]
async fn soft_deleted_tasks_are_hidden_from_list() {
    let pool = setup_test_db().await.expect("db setup");
    let user_id = create_test_user(&pool).await;
    let service = TaskService::new(pool);

    let keep = service
        .create_task(user_id, "Keep me", None, false)
        .await
        .expect("create task");
    let drop = service
        .create_task(user_id, "Drop me", None, false)
        .await
        .expect("create task");

    service
        .delete_task(drop.id, user_id)
        .await
        .expect("delete task");

    let tasks = service.list_tasks(user_id).await.expect("list");
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, keep.id);
}
