//! # Domain Models
//!
//! These structs represent the core entities of AnimeHub and double as the
//! wire shapes exchanged with the remote `posts` collection. Serde renames
//! map snake_case fields onto the store's historical column names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single board post, as held in the remote `posts` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Assigned by the store on insert; never mutated afterwards.
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "imageURL", default)]
    pub image_url: Option<String>,
    /// Shared plaintext credential gating edit/delete of this post and its
    /// comments. Compared verbatim after trimming; there is no recovery.
    #[serde(rename = "secretKey", default)]
    pub secret_key: String,
    /// Forward reference to another post. Never validated; a dangling id
    /// degrades to an omitted reference panel.
    #[serde(rename = "referencedPostId", default)]
    pub referenced_post_id: Option<Uuid>,
    #[serde(default)]
    pub upvotes: i64,
    /// Insertion-ordered; the index is the only deletion handle, so removing
    /// comment `i` shifts every later index down.
    #[serde(default)]
    pub comments: Vec<String>,
    /// Assigned by the store at insert time; never mutated afterwards.
    pub created_at: DateTime<Utc>,
}

/// Feed projection: the listing never fetches bodies, comments, or secrets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub upvotes: i64,
}

/// Insert payload. `id` and `created_at` are the store's to assign.
#[derive(Debug, Clone, Serialize)]
pub struct NewPost {
    pub title: String,
    pub description: String,
    #[serde(rename = "imageURL")]
    pub image_url: Option<String>,
    #[serde(rename = "secretKey")]
    pub secret_key: String,
    #[serde(rename = "referencedPostId")]
    pub referenced_post_id: Option<Uuid>,
    pub upvotes: i64,
    pub comments: Vec<String>,
}

impl NewPost {
    /// A fresh post always starts with zero upvotes and no comments.
    pub fn new(
        title: String,
        description: String,
        image_url: Option<String>,
        secret_key: String,
        referenced_post_id: Option<Uuid>,
    ) -> Self {
        Self {
            title,
            description,
            image_url,
            secret_key,
            referenced_post_id,
            upvotes: 0,
            comments: Vec::new(),
        }
    }
}

/// Partial update payload: only present fields reach the store, so a patch
/// can never clobber columns it does not name.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PostPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Double option: `None` leaves the column untouched, `Some(None)`
    /// writes an explicit null to clear it.
    #[serde(rename = "imageURL", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upvotes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<String>>,
}

impl PostPatch {
    pub fn upvotes(count: i64) -> Self {
        Self {
            upvotes: Some(count),
            ..Self::default()
        }
    }

    pub fn comments(list: Vec<String>) -> Self {
        Self {
            comments: Some(list),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.image_url.is_none()
            && self.upvotes.is_none()
            && self.comments.is_none()
    }
}

/// Feed ordering, always descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Newest,
    Upvotes,
}

impl SortKey {
    /// Column the store orders by.
    pub fn column(self) -> &'static str {
        match self {
            SortKey::Newest => "created_at",
            SortKey::Upvotes => "upvotes",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "newest" => Some(SortKey::Newest),
            "upvotes" => Some(SortKey::Upvotes),
            _ => None,
        }
    }
}
