//! Per-post session workflow.
//!
//! One `PostSession` coordinates every read and mutation against a single
//! post. The rule throughout: local state adopts a write only after the
//! store has acknowledged it, so the view never runs ahead of the remote
//! source of truth. Remote failure leaves the session exactly as it was;
//! the caller surfaces the error and the user may retry by re-invoking the
//! action.

use domains::error::{AppError, Result};
use domains::models::{Post, PostPatch};
use domains::traits::{AccessGate, PostStore};
use tracing::{error, warn};
use uuid::Uuid;

/// Editable fields, seeded from the post when edit mode opens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub description: String,
    pub image_url: String,
}

impl PostDraft {
    fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            description: post.description.clone(),
            image_url: post.image_url.clone().unwrap_or_default(),
        }
    }
}

/// Session state for one open post. `post: None` is the terminal not-found
/// view; no operation besides `load` ever re-fetches into it.
#[derive(Debug)]
pub struct PostSession {
    id: Uuid,
    post: Option<Post>,
    comments: Vec<String>,
    referenced: Option<Post>,
    editing: bool,
    draft: PostDraft,
}

impl PostSession {
    /// Fetches the post and, when present, its referenced post.
    ///
    /// Both not-found and transport failure resolve to the not-found state;
    /// transport failures are additionally logged. A failed or dangling
    /// referenced-post lookup is swallowed: the panel is simply omitted.
    pub async fn load(store: &dyn PostStore, id: Uuid) -> Self {
        let mut session = Self {
            id,
            post: None,
            comments: Vec::new(),
            referenced: None,
            editing: false,
            draft: PostDraft::default(),
        };

        match store.fetch(id).await {
            Ok(Some(post)) => {
                session.comments = post.comments.clone();
                if let Some(ref_id) = post.referenced_post_id {
                    session.referenced = match store.fetch(ref_id).await {
                        Ok(found) => found,
                        Err(err) => {
                            warn!(%ref_id, %err, "referenced post lookup failed");
                            None
                        }
                    };
                }
                session.post = Some(post);
            }
            Ok(None) => {}
            Err(err) => error!(%id, %err, "failed to load post"),
        }

        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn post(&self) -> Option<&Post> {
        self.post.as_ref()
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn referenced(&self) -> Option<&Post> {
        self.referenced.as_ref()
    }

    pub fn editing(&self) -> bool {
        self.editing
    }

    pub fn draft(&self) -> &PostDraft {
        &self.draft
    }

    /// Writes `upvotes = local + 1`. The local count may be stale; two
    /// concurrent upvoters can lose an increment (accepted, not resolved).
    pub async fn upvote(&mut self, store: &dyn PostStore) -> Result<()> {
        let next = self.require_post()?.upvotes + 1;
        store.update(self.id, PostPatch::upvotes(next)).await?;
        if let Some(post) = self.post.as_mut() {
            post.upvotes = next;
        }
        Ok(())
    }

    /// Appends a comment, re-reading the stored list right before the write
    /// to narrow (not close) the window for lost updates.
    pub async fn add_comment(&mut self, store: &dyn PostStore, text: &str) -> Result<()> {
        self.require_post()?;
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::Validation("comment must not be empty".into()));
        }

        let current = store
            .fetch(self.id)
            .await?
            .ok_or_else(|| AppError::NotFound("post".into(), self.id.to_string()))?;
        let mut list = current.comments;
        list.push(text.to_string());

        store.update(self.id, PostPatch::comments(list.clone())).await?;
        self.adopt_comments(list);
        Ok(())
    }

    /// Removes the comment at `index` from the local list and writes the
    /// full list back. Index positions are unstable under concurrent
    /// writers; last write wins on the whole list.
    pub async fn delete_comment(
        &mut self,
        store: &dyn PostStore,
        gate: &dyn AccessGate,
        index: usize,
        credential: &str,
    ) -> Result<()> {
        self.authorize(gate, credential)?;
        if index >= self.comments.len() {
            return Err(AppError::Validation(format!("no comment at position {index}")));
        }

        let mut list = self.comments.clone();
        list.remove(index);

        store.update(self.id, PostPatch::comments(list.clone())).await?;
        self.adopt_comments(list);
        Ok(())
    }

    /// Enters edit mode with a draft seeded from the current post.
    pub fn start_edit(&mut self) -> Result<()> {
        self.draft = PostDraft::from_post(self.require_post()?);
        self.editing = true;
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.editing = false;
    }

    /// Writes title, description, and image URL in a single update, then
    /// adopts them and leaves edit mode. On any failure edit mode stays
    /// open with the draft intact.
    pub async fn save_changes(
        &mut self,
        store: &dyn PostStore,
        gate: &dyn AccessGate,
        draft: PostDraft,
        credential: &str,
    ) -> Result<()> {
        self.editing = true;
        self.draft = draft;

        self.authorize(gate, credential)?;
        if self.draft.title.trim().is_empty() {
            return Err(AppError::Validation("title must not be empty".into()));
        }

        let image_url = match self.draft.image_url.trim() {
            "" => None,
            url => Some(url.to_string()),
        };
        let patch = PostPatch {
            title: Some(self.draft.title.clone()),
            description: Some(self.draft.description.clone()),
            image_url: Some(image_url.clone()),
            ..PostPatch::default()
        };
        store.update(self.id, patch).await?;

        if let Some(post) = self.post.as_mut() {
            post.title = self.draft.title.clone();
            post.description = self.draft.description.clone();
            post.image_url = image_url;
        }
        self.editing = false;
        Ok(())
    }

    /// Deletes the post permanently. On success the session terminates and
    /// the caller returns control to the listing view.
    pub async fn delete_post(
        &mut self,
        store: &dyn PostStore,
        gate: &dyn AccessGate,
        credential: &str,
    ) -> Result<()> {
        self.authorize(gate, credential)?;
        store.delete(self.id).await?;

        self.post = None;
        self.comments.clear();
        self.referenced = None;
        self.editing = false;
        Ok(())
    }

    fn require_post(&self) -> Result<&Post> {
        self.post
            .as_ref()
            .ok_or_else(|| AppError::NotFound("post".into(), self.id.to_string()))
    }

    fn authorize(&self, gate: &dyn AccessGate, credential: &str) -> Result<()> {
        let post = self.require_post()?;
        if gate.authorize(post, credential) {
            Ok(())
        } else {
            Err(AppError::Unauthorized("secret key does not match".into()))
        }
    }

    fn adopt_comments(&mut self, list: Vec<String>) {
        if let Some(post) = self.post.as_mut() {
            post.comments = list.clone();
        }
        self.comments = list;
    }
}
