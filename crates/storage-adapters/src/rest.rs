//! PostgREST-style adapter for the hosted `posts` collection.
//!
//! Wire conventions: filters as `column=eq.value` query parameters, ordering
//! as `order=column.desc`, inserts echoed back with
//! `Prefer: return=representation`. Single-row lookups request the array
//! form and treat an empty array as no row; the workflow decides whether
//! that is terminal.

use async_trait::async_trait;
use domains::error::{AppError, Result};
use domains::models::{NewPost, Post, PostPatch, PostSummary, SortKey};
use domains::traits::PostStore;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;
use uuid::Uuid;

/// Connection settings for the hosted collection.
#[derive(Debug, Clone)]
pub struct RestStoreConfig {
    /// Service root, e.g. `https://xyz.supabase.co/rest/v1`.
    pub base_url: String,
    /// Service key, stamped on every request as `apikey` and bearer token.
    pub api_key: SecretString,
}

pub struct RestPostStore {
    http: reqwest::Client,
    posts_url: String,
    api_key: SecretString,
}

impl RestPostStore {
    pub fn new(config: RestStoreConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            posts_url: posts_url(&config.base_url),
            api_key: config.api_key,
        }
    }

    fn request(&self, method: reqwest::Method, query: &[(&str, &str)]) -> reqwest::RequestBuilder {
        let key = self.api_key.expose_secret();
        self.http
            .request(method, &self.posts_url)
            .query(query)
            .header("apikey", key)
            .bearer_auth(key)
    }
}

fn posts_url(base_url: &str) -> String {
    format!("{}/posts", base_url.trim_end_matches('/'))
}

fn order_param(sort: SortKey) -> String {
    format!("{}.desc", sort.column())
}

fn id_filter(id: Uuid) -> String {
    format!("eq.{id}")
}

fn transport(context: &str, err: impl std::fmt::Display) -> AppError {
    AppError::Transport(format!("{context}: {err}"))
}

/// Maps a non-2xx response to the transport error the workflows expect.
fn check_status(context: &str, response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(AppError::Transport(format!("{context}: store responded {status}")))
    }
}

#[async_trait]
impl PostStore for RestPostStore {
    async fn list(&self, sort: SortKey) -> Result<Vec<PostSummary>> {
        let order = order_param(sort);
        let response = self
            .request(
                reqwest::Method::GET,
                &[
                    ("select", "id,title,created_at,upvotes"),
                    ("order", order.as_str()),
                ],
            )
            .send()
            .await
            .map_err(|e| transport("list posts", e))?;
        check_status("list posts", response)?
            .json()
            .await
            .map_err(|e| transport("decode post list", e))
    }

    async fn fetch(&self, id: Uuid) -> Result<Option<Post>> {
        let filter = id_filter(id);
        let response = self
            .request(
                reqwest::Method::GET,
                &[("select", "*"), ("id", filter.as_str())],
            )
            .send()
            .await
            .map_err(|e| transport("fetch post", e))?;
        let mut rows: Vec<Post> = check_status("fetch post", response)?
            .json()
            .await
            .map_err(|e| transport("decode post", e))?;
        Ok(rows.pop())
    }

    async fn insert(&self, new_post: NewPost) -> Result<Post> {
        let response = self
            .request(reqwest::Method::POST, &[])
            .header("Prefer", "return=representation")
            .json(&[new_post])
            .send()
            .await
            .map_err(|e| transport("insert post", e))?;
        let mut rows: Vec<Post> = check_status("insert post", response)?
            .json()
            .await
            .map_err(|e| transport("decode created post", e))?;
        rows.pop()
            .ok_or_else(|| AppError::Transport("insert returned no record".into()))
    }

    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<()> {
        if patch.is_empty() {
            debug!(%id, "skipping empty patch");
            return Ok(());
        }
        let filter = id_filter(id);
        let response = self
            .request(reqwest::Method::PATCH, &[("id", filter.as_str())])
            .header("Prefer", "return=minimal")
            .json(&patch)
            .send()
            .await
            .map_err(|e| transport("update post", e))?;
        check_status("update post", response)?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let filter = id_filter(id);
        let response = self
            .request(reqwest::Method::DELETE, &[("id", filter.as_str())])
            .send()
            .await
            .map_err(|e| transport("delete post", e))?;
        check_status("delete post", response)?;
        Ok(())
    }
}
