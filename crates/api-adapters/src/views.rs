//! Askama view models.
//!
//! Handlers precompute display strings (relative ages, banners) so the
//! templates stay pure markup over these structs.

use askama::Template;
use services::PostDraft;
use uuid::Uuid;

/// One row of the browsable feed.
pub struct FeedRow<'a> {
    pub id: Uuid,
    pub title: &'a str,
    pub age: String,
    pub upvotes: i64,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub posts: Vec<FeedRow<'a>>,
    pub query: &'a str,
    pub sort_param: &'a str,
    pub banner: Option<&'a str>,
}

/// The read-only referenced-post panel. Omitted entirely when the
/// reference is absent, dangling, or failed to load.
pub struct RefPanel<'a> {
    pub id: Uuid,
    pub title: &'a str,
    pub age: String,
}

#[derive(Template)]
#[template(path = "post.html")]
pub struct PostTemplate<'a> {
    pub id: Uuid,
    pub title: &'a str,
    pub description: &'a str,
    pub image_url: Option<&'a str>,
    pub upvotes: i64,
    pub age: String,
    pub comments: &'a [String],
    pub referenced: Option<RefPanel<'a>>,
    pub editing: bool,
    pub draft: &'a PostDraft,
    pub banner: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "create.html")]
pub struct CreateTemplate<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub image_url: &'a str,
    pub referenced: &'a str,
    pub banner: Option<&'a str>,
}

/// Shown exactly once after creating a post with a generated key; the key
/// cannot be retrieved later.
#[derive(Template)]
#[template(path = "key_reveal.html")]
pub struct KeyRevealTemplate<'a> {
    pub key: &'a str,
    pub post_id: Uuid,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate;
