/// Database access layer
///
/// Repositories are free async functions over `&PgPool` issuing
/// parameterized queries. Anything interpolated into SQL text (sort
/// columns, sort order) goes through an allow-list first; user data is
/// always bound.
pub mod comment_repo;
pub mod like_repo;
pub mod post_repo;
pub mod task_repo;
pub mod user_repo;
