//! Shared fixtures for the cross-crate test suite.

use chrono::Utc;
use domains::models::{NewPost, Post};
use uuid::Uuid;

/// A minimal insert payload with the given title and secret key.
pub fn new_post(title: &str, secret: &str) -> NewPost {
    NewPost::new(
        title.to_string(),
        String::new(),
        None,
        secret.to_string(),
        None,
    )
}

/// A fully materialized post, as the store would return it.
pub fn stored_post(id: Uuid, upvotes: i64, comments: &[&str], secret: &str) -> Post {
    Post {
        id,
        title: "Naruto rewatch thread".to_string(),
        description: "Starting from episode 1.".to_string(),
        image_url: None,
        secret_key: secret.to_string(),
        referenced_post_id: None,
        upvotes,
        comments: comments.iter().map(|c| c.to_string()).collect(),
        created_at: Utc::now(),
    }
}
