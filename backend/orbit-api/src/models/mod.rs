/// Data models for orbit-api
///
/// Row structs mapped with `sqlx::FromRow`. Request/response DTOs live next
/// to the handlers that accept them.
pub mod post;
pub mod social;
pub mod task;
pub mod user;

pub use post::Post;
pub use social::{Comment, Like};
pub use task::Task;
pub use user::{User, UserProfile};
