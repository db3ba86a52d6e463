//! In-memory `PostStore` for tests, seeding, and offline demo runs.
//!
//! Mirrors the remote collection's observable behavior: ids and creation
//! timestamps are assigned at insert, listings are descending on the sort
//! column, and a delete that matches nothing is still ok.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use domains::error::Result;
use domains::models::{NewPost, Post, PostPatch, PostSummary, SortKey};
use domains::traits::PostStore;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct MemoryPostStore {
    posts: DashMap<Uuid, Post>,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn list(&self, sort: SortKey) -> Result<Vec<PostSummary>> {
        let mut summaries: Vec<PostSummary> = self
            .posts
            .iter()
            .map(|entry| PostSummary {
                id: entry.id,
                title: entry.title.clone(),
                created_at: entry.created_at,
                upvotes: entry.upvotes,
            })
            .collect();
        match sort {
            SortKey::Newest => summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortKey::Upvotes => summaries.sort_by(|a, b| b.upvotes.cmp(&a.upvotes)),
        }
        Ok(summaries)
    }

    async fn fetch(&self, id: Uuid) -> Result<Option<Post>> {
        Ok(self.posts.get(&id).map(|entry| entry.value().clone()))
    }

    async fn insert(&self, new_post: NewPost) -> Result<Post> {
        let post = Post {
            id: Uuid::now_v7(),
            title: new_post.title,
            description: new_post.description,
            image_url: new_post.image_url,
            secret_key: new_post.secret_key,
            referenced_post_id: new_post.referenced_post_id,
            upvotes: new_post.upvotes,
            comments: new_post.comments,
            created_at: Utc::now(),
        };
        self.posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<()> {
        if let Some(mut entry) = self.posts.get_mut(&id) {
            if let Some(title) = patch.title {
                entry.title = title;
            }
            if let Some(description) = patch.description {
                entry.description = description;
            }
            if let Some(image_url) = patch.image_url {
                entry.image_url = image_url;
            }
            if let Some(upvotes) = patch.upvotes {
                entry.upvotes = upvotes;
            }
            if let Some(comments) = patch.comments {
                entry.comments = comments;
            }
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.posts.remove(&id);
        Ok(())
    }
}
