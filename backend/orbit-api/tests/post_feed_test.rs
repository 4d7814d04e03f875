//! Integration Tests: Post Feed
//!
//! Exercises the feed against a real database:
//! - Post CRUD and ownership enforcement
//! - Pagination bounds and page counts
//! - Filtered search (full text and substring) with dual counts
//! - Like/unlike idempotency and counter maintenance
//! - Comment cascade on post deletion

mod common;

use common::{create_test_user, setup_test_db};
use orbit_api::db::comment_repo;
use orbit_api::error::AppError;
use orbit_api::services::{PostService, SocialService};

#[tokio::test]
async fn create_then_get_post() {
    let pool = setup_test_db().await.expect("db setup");
    let user_id = create_test_user(&pool).await;
    let service = PostService::new(pool);

    let created = service
        .create_post(user_id, "First light over the bay", "bay.jpg")
        .await
        .expect("create post");

    let fetched = service.get_post(created.post_id).await.expect("fetch");
    assert_eq!(fetched.post_text, "First light over the bay");
    assert_eq!(fetched.post_image, "bay.jpg");
    assert_eq!(fetched.likes, 0);
    assert_eq!(fetched.user_id, user_id);
}

#[tokio::test]
async fn pagination_bounds_are_respected() {
    let pool = setup_test_db().await.expect("db setup");
    let user_id = create_test_user(&pool).await;
    let service = PostService::new(pool);

    for i in 0..15 {
        service
            .create_post(user_id, &format!("post number {}", i), "")
            .await
            .expect("create post");
    }

    let first = service
        .list_page(Some(1), Some(10), "created_at", "desc")
        .await
        .expect("page 1");
    assert_eq!(first.posts.len(), 10);
    assert_eq!(first.total_count, 15);
    assert_eq!(first.current_page, 1);
    assert_eq!(first.total_pages, 2);

    let second = service
        .list_page(Some(2), Some(10), "created_at", "desc")
        .await
        .expect("page 2");
    assert_eq!(second.posts.len(), 5);
    assert_eq!(second.current_page, 2);

    // Out-of-range pages are empty but still report totals
    let beyond = service
        .list_page(Some(4), Some(10), "created_at", "desc")
        .await
        .expect("page 4");
    assert!(beyond.posts.is_empty());
    assert_eq!(beyond.total_count, 15);

    // Invalid inputs clamp to defaults rather than erroring
    let clamped = service
        .list_page(Some(0), Some(-5), "created_at", "desc")
        .await
        .expect("clamped page");
    assert_eq!(clamped.current_page, 1);
    assert_eq!(clamped.posts.len(), 10);
}

#[tokio::test]
async fn query_reports_total_and_filtered_counts() {
    let pool = setup_test_db().await.expect("db setup");
    let user_id = create_test_user(&pool).await;
    let service = PostService::new(pool);

    for text in [
        "I love coffee in the morning",
        "tea time is the best time",
        "coffee break at noon",
        "walking the dog",
    ] {
        service
            .create_post(user_id, text, "")
            .await
            .expect("create post");
    }

    let page = service
        .query(
            Some(1),
            Some(10),
            Some("post_text"),
            Some("coffee"),
            "created_at",
            "desc",
        )
        .await
        .expect("query");

    assert_eq!(page.total_count, 4);
    assert_eq!(page.filtered_count, 2);
    assert_eq!(page.posts.len(), 2);
    assert_eq!(page.total_pages, 1);
    assert!(page.posts.iter().all(|p| p.post_text.contains("coffee")));

    // Substring (wildcard) matching: "offe" is not a word, only ILIKE hits
    let substring = service
        .query(
            Some(1),
            Some(10),
            Some("post_text"),
            Some("offe"),
            "created_at",
            "desc",
        )
        .await
        .expect("substring query");
    assert_eq!(substring.filtered_count, 2);

    // No filter when search text is absent
    let unfiltered = service
        .query(Some(1), Some(10), None, None, "created_at", "desc")
        .await
        .expect("unfiltered query");
    assert_eq!(unfiltered.filtered_count, unfiltered.total_count);

    // Nothing matched: zero pages
    let empty = service
        .query(
            Some(1),
            Some(10),
            Some("post_text"),
            Some("zeppelin"),
            "created_at",
            "desc",
        )
        .await
        .expect("empty query");
    assert_eq!(empty.filtered_count, 0);
    assert_eq!(empty.total_pages, 0);
    assert!(empty.posts.is_empty());
}

#[tokio::test]
async fn query_rejects_unknown_column() {
    let pool = setup_test_db().await.expect("db setup");
    let service = PostService::new(pool);

    let err = service
        .query(
            Some(1),
            Some(10),
            Some("user_id"),
            Some("anything"),
            "created_at",
            "desc",
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn sorting_by_likes_respects_order() {
    let pool = setup_test_db().await.expect("db setup");
    let author = create_test_user(&pool).await;
    let posts = PostService::new(pool.clone());
    let social = SocialService::new(pool.clone());

    let quiet = posts
        .create_post(author, "nobody noticed this one", "")
        .await
        .expect("create post");
    let popular = posts
        .create_post(author, "everyone loved this one", "")
        .await
        .expect("create post");

    for _ in 0..3 {
        let fan = create_test_user(&pool).await;
        social
            .like_post(popular.post_id, fan)
            .await
            .expect("like post");
    }

    let page = posts
        .list_page(Some(1), Some(10), "likes", "desc")
        .await
        .expect("sorted page");
    assert_eq!(page.posts[0].post_id, popular.post_id);
    assert_eq!(page.posts[0].likes, 3);
    assert_eq!(page.posts[1].post_id, quiet.post_id);
}

#[tokio::test]
async fn likes_are_idempotent_and_keep_the_counter_in_step() {
    let pool = setup_test_db().await.expect("db setup");
    let author = create_test_user(&pool).await;
    let fan = create_test_user(&pool).await;
    let posts = PostService::new(pool.clone());
    let social = SocialService::new(pool);

    let post = posts
        .create_post(author, "like me twice", "")
        .await
        .expect("create post");

    let first = social.like_post(post.post_id, fan).await.expect("like");
    assert!(first.changed);
    assert_eq!(first.likes, 1);

    let repeat = social.like_post(post.post_id, fan).await.expect("re-like");
    assert!(!repeat.changed);
    assert_eq!(repeat.likes, 1);

    // Denormalized counter on the post row agrees with the side table
    let reloaded = posts.get_post(post.post_id).await.expect("reload");
    assert_eq!(reloaded.likes, 1);

    let unliked = social.unlike_post(post.post_id, fan).await.expect("unlike");
    assert!(unliked.changed);
    assert_eq!(unliked.likes, 0);

    let repeat_unlike = social
        .unlike_post(post.post_id, fan)
        .await
        .expect("re-unlike");
    assert!(!repeat_unlike.changed);
    assert_eq!(repeat_unlike.likes, 0);

    let reloaded = posts.get_post(post.post_id).await.expect("reload");
    assert_eq!(reloaded.likes, 0);
}

#[tokio::test]
async fn only_the_author_may_update_or_delete() {
    let pool = setup_test_db().await.expect("db setup");
    let author = create_test_user(&pool).await;
    let stranger = create_test_user(&pool).await;
    let posts = PostService::new(pool);

    let post = posts
        .create_post(author, "hands off", "")
        .await
        .expect("create post");

    // A foreign post reads as not-found on update, like the task path
    let err = posts
        .update_post(post.post_id, stranger, "defaced", "")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = posts.delete_post(post.post_id, stranger).await.unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));

    posts
        .delete_post(post.post_id, author)
        .await
        .expect("author delete");

    let err = posts.get_post(post.post_id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn deleting_a_post_cascades_to_comments_and_likes() {
    let pool = setup_test_db().await.expect("db setup");
    let author = create_test_user(&pool).await;
    let commenter = create_test_user(&pool).await;
    let posts = PostService::new(pool.clone());
    let social = SocialService::new(pool.clone());

    let post = posts
        .create_post(author, "short-lived", "")
        .await
        .expect("create post");

    social
        .add_comment(post.post_id, commenter, "first!")
        .await
        .expect("comment");
    social
        .like_post(post.post_id, commenter)
        .await
        .expect("like");

    posts
        .delete_post(post.post_id, author)
        .await
        .expect("delete post");

    let orphaned = comment_repo::count_post_comments(&pool, post.post_id)
        .await
        .expect("count comments");
    assert_eq!(orphaned, 0);
}

#[tokio::test]
async fn commenting_on_a_missing_post_is_not_found() {
    let pool = setup_test_db().await.expect("db setup");
    let user_id = create_test_user(&pool).await;
    let social = SocialService::new(pool);

    let err = social
        .add_comment(uuid::Uuid::new_v4(), user_id, "into the void")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}
