/// HTTP handlers for orbit-api endpoints
///
/// Handlers extract identity and parameters, delegate to services, and
/// convert results into HTTP responses. No SQL and no business rules here.
pub mod comments;
pub mod likes;
pub mod posts;
pub mod tasks;
pub mod users;

// Re-export handler functions at module level
pub use comments::{create_comment, delete_comment, get_post_comments, update_comment};
pub use likes::{get_post_likes, like_post, unlike_post};
pub use posts::{
    create_post, delete_post, get_post, get_post_for_user, get_posts_page, get_posts_page_sorted,
    get_user_posts, query_posts, update_post,
};
pub use tasks::{create_task, delete_task, get_task, list_tasks, update_task};
pub use users::{get_current_user, get_user_profile};
