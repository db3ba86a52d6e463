//! Post creation workflow.
//!
//! Preconditions run before any store call. The secret key is optional at
//! creation: a blank field gets a generated 4-digit numeric key, which the
//! caller must show exactly once, since it cannot be retrieved later.

use domains::error::{AppError, Result};
use domains::models::{NewPost, Post};
use domains::traits::PostStore;
use rand::Rng;
use uuid::Uuid;

/// Raw form input for a new post.
#[derive(Debug, Clone, Default)]
pub struct CreatePostInput {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub referenced_post_id: Option<Uuid>,
    pub secret_key: String,
}

/// The created record plus, when the author left the key blank, the
/// generated key to reveal once.
#[derive(Debug)]
pub struct CreatedPost {
    pub post: Post,
    pub generated_key: Option<String>,
}

pub async fn create_post(store: &dyn PostStore, input: CreatePostInput) -> Result<CreatedPost> {
    let title = input.title.trim();
    if title.is_empty() {
        return Err(AppError::Validation("title is required".into()));
    }

    let supplied = input.secret_key.trim();
    let (secret_key, generated_key) = if supplied.is_empty() {
        let key = generate_numeric_key();
        (key.clone(), Some(key))
    } else {
        (supplied.to_string(), None)
    };

    let image_url = match input.image_url.trim() {
        "" => None,
        url => Some(url.to_string()),
    };

    let new_post = NewPost::new(
        title.to_string(),
        input.description,
        image_url,
        secret_key,
        input.referenced_post_id,
    );
    let post = store.insert(new_post).await?;
    Ok(CreatedPost {
        post,
        generated_key,
    })
}

/// Four decimal digits, zero-padded.
pub fn generate_numeric_key() -> String {
    format!("{:04}", rand::thread_rng().gen_range(0..10_000))
}
