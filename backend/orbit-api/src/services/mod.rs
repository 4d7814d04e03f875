/// Business logic layer
///
/// Services own a pool handle, enforce ownership and validation rules, and
/// translate repository results into domain outcomes. Handlers stay thin.
pub mod posts;
pub mod social;
pub mod tasks;
pub mod users;

pub use posts::{FilteredPostPage, PageRequest, PostPage, PostService};
pub use social::{LikeOutcome, SocialService};
pub use tasks::TaskService;
pub use users::UserService;
