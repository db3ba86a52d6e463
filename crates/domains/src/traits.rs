//! # Core Traits (Ports)
//!
//! Any adapter must implement these traits to be wired into the binary.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{NewPost, Post, PostPatch, PostSummary, SortKey};

/// Persistence contract for the remote `posts` collection.
///
/// The store owns `id` and `created_at`; clients only ever send the payload
/// types. A lookup that matches no row is `Ok(None)`, not an error; the
/// workflow decides whether that is terminal.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All posts as feed summaries, ordered descending by the sort column.
    async fn list(&self, sort: SortKey) -> Result<Vec<PostSummary>>;

    /// One full record by id, including comments and the secret key.
    async fn fetch(&self, id: Uuid) -> Result<Option<Post>>;

    /// Inserts a new record and returns it as created (with id and
    /// created_at assigned).
    async fn insert(&self, new_post: NewPost) -> Result<Post>;

    /// Applies a partial update to the record with the given id.
    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<()>;

    /// Permanently deletes the record with the given id.
    async fn delete(&self, id: Uuid) -> Result<()>;
}

/// Authorization contract for privileged post actions.
///
/// Deliberately narrow: the workflow hands over the post and whatever the
/// user typed, and gets a yes/no. Swapping the plaintext comparison for a
/// hashed scheme touches only the implementing adapter.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait AccessGate: Send + Sync {
    /// Whether `credential` authorizes edit/delete actions on `post`.
    fn authorize(&self, post: &Post, credential: &str) -> bool;
}
