/// Authorization checks for orbit-api
///
/// Ownership-based permission checks for post deletion. Tasks, comments,
/// and post updates are scoped at the query level instead (owner in the
/// WHERE clause), so a foreign row reads as not-found rather than
/// forbidden.
use crate::error::{AppError, Result};
use crate::models::Post;
use uuid::Uuid;

/// Check if a user owns a post
pub fn check_post_ownership(user_id: Uuid, post: &Post) -> Result<()> {
    if post.user_id == user_id {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "you don't have permission to modify this post".to_string(),
        ))
    }
}

/// Only the author can delete a post
pub fn check_post_deletion(user_id: Uuid, post: &Post) -> Result<()> {
    check_post_ownership(user_id, post)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn post_owned_by(user_id: Uuid) -> Post {
        Post {
            post_id: Uuid::new_v4(),
            user_id,
            post_text: "hello".to_string(),
            post_image: String::new(),
            likes: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn owner_passes_ownership_check() {
        let owner = Uuid::new_v4();
        assert!(check_post_ownership(owner, &post_owned_by(owner)).is_ok());
    }

    #[test]
    fn stranger_fails_ownership_check() {
        let post = post_owned_by(Uuid::new_v4());
        let err = check_post_deletion(Uuid::new_v4(), &post).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }
}
