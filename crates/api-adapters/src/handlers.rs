//! HTTP handlers.
//!
//! Each request builds the relevant workflow, runs exactly one operation,
//! and either redirects (See-Other on success) or re-renders the view with
//! a human-readable banner. Transport failures are logged here and shown as
//! a generic message; the session state they left untouched is what gets
//! re-rendered.

use std::sync::Arc;

use askama::Template;
use axum::extract::{Form, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use domains::error::AppError;
use domains::models::SortKey;
use services::{create_post, time_ago_from_now, CreatePostInput, Feed, PostDraft, PostSession};

use crate::views::{
    CreateTemplate, FeedRow, IndexTemplate, KeyRevealTemplate, NotFoundTemplate, PostTemplate,
    RefPanel,
};
use crate::AppState;

const STORE_DOWN: &str =
    "The board could not reach the store; nothing was changed. Please try again.";

fn page(status: StatusCode, template: impl Template) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            error!(%err, "template rendering failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Maps a workflow error to a response status and user-facing banner.
/// Transport details stay in the log; the user sees the generic message.
fn surface(err: &AppError) -> (StatusCode, String) {
    match err {
        AppError::NotFound(..) => (StatusCode::NOT_FOUND, err.to_string()),
        AppError::Validation(_) => (StatusCode::BAD_REQUEST, err.to_string()),
        AppError::Unauthorized(_) => (StatusCode::FORBIDDEN, err.to_string()),
        AppError::Transport(_) => {
            error!(%err, "store call failed");
            (StatusCode::BAD_GATEWAY, STORE_DOWN.to_string())
        }
    }
}

fn post_page(session: &PostSession, status: StatusCode, banner: Option<&str>) -> Response {
    let Some(post) = session.post() else {
        return page(StatusCode::NOT_FOUND, NotFoundTemplate);
    };
    let referenced = session.referenced().map(|r| RefPanel {
        id: r.id,
        title: &r.title,
        age: time_ago_from_now(r.created_at),
    });
    page(
        status,
        PostTemplate {
            id: post.id,
            title: &post.title,
            description: &post.description,
            image_url: post.image_url.as_deref(),
            upvotes: post.upvotes,
            age: time_ago_from_now(post.created_at),
            comments: session.comments(),
            referenced,
            editing: session.editing(),
            draft: session.draft(),
            banner,
        },
    )
}

fn back_to(id: Uuid) -> Response {
    Redirect::to(&format!("/posts/{id}")).into_response()
}

#[derive(Deserialize)]
pub struct FeedParams {
    sort: Option<String>,
    q: Option<String>,
}

pub async fn feed_index(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FeedParams>,
) -> Response {
    let sort = params
        .sort
        .as_deref()
        .and_then(SortKey::parse)
        .unwrap_or_default();

    let mut feed = Feed::new();
    let banner = match feed.refresh(state.store.as_ref(), sort).await {
        Ok(()) => None,
        Err(err) => Some(surface(&err).1),
    };
    feed.set_query(params.q.unwrap_or_default());

    let posts = feed
        .visible()
        .into_iter()
        .map(|p| FeedRow {
            id: p.id,
            title: &p.title,
            age: time_ago_from_now(p.created_at),
            upvotes: p.upvotes,
        })
        .collect();

    page(
        StatusCode::OK,
        IndexTemplate {
            posts,
            query: feed.query(),
            sort_param: match sort {
                SortKey::Newest => "newest",
                SortKey::Upvotes => "upvotes",
            },
            banner: banner.as_deref(),
        },
    )
}

#[derive(Deserialize)]
pub struct CreateForm {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image_url: String,
    #[serde(default)]
    referenced_post_id: String,
    #[serde(default)]
    secret_key: String,
}

fn create_page(form: &CreateForm, status: StatusCode, banner: &str) -> Response {
    page(
        status,
        CreateTemplate {
            title: &form.title,
            description: &form.description,
            image_url: &form.image_url,
            referenced: &form.referenced_post_id,
            banner: Some(banner),
        },
    )
}

pub async fn create_form() -> Response {
    page(
        StatusCode::OK,
        CreateTemplate {
            title: "",
            description: "",
            image_url: "",
            referenced: "",
            banner: None,
        },
    )
}

pub async fn create_submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CreateForm>,
) -> Response {
    let referenced = form.referenced_post_id.trim();
    let referenced_post_id = if referenced.is_empty() {
        None
    } else {
        match Uuid::parse_str(referenced) {
            Ok(id) => Some(id),
            Err(_) => {
                return create_page(
                    &form,
                    StatusCode::BAD_REQUEST,
                    "the referenced post id is not a valid post id",
                )
            }
        }
    };

    let input = CreatePostInput {
        title: form.title.clone(),
        description: form.description.clone(),
        image_url: form.image_url.clone(),
        referenced_post_id,
        secret_key: form.secret_key.clone(),
    };
    match create_post(state.store.as_ref(), input).await {
        Ok(created) => match created.generated_key {
            Some(key) => page(
                StatusCode::OK,
                KeyRevealTemplate {
                    key: &key,
                    post_id: created.post.id,
                },
            ),
            None => Redirect::to("/").into_response(),
        },
        Err(err) => {
            let (status, banner) = surface(&err);
            create_page(&form, status, &banner)
        }
    }
}

#[derive(Deserialize)]
pub struct PostParams {
    edit: Option<String>,
}

pub async fn view_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Query(params): Query<PostParams>,
) -> Response {
    let mut session = PostSession::load(state.store.as_ref(), id).await;
    if session.post().is_some() && params.edit.is_some() {
        // cannot fail once the post is present
        session.start_edit().ok();
    }
    post_page(&session, StatusCode::OK, None)
}

pub async fn upvote(State(state): State<Arc<AppState>>, Path(id): Path<Uuid>) -> Response {
    let mut session = PostSession::load(state.store.as_ref(), id).await;
    match session.upvote(state.store.as_ref()).await {
        Ok(()) => back_to(id),
        Err(err) => {
            let (status, banner) = surface(&err);
            post_page(&session, status, Some(&banner))
        }
    }
}

#[derive(Deserialize)]
pub struct CommentForm {
    #[serde(default)]
    text: String,
}

pub async fn add_comment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Form(form): Form<CommentForm>,
) -> Response {
    let mut session = PostSession::load(state.store.as_ref(), id).await;
    match session.add_comment(state.store.as_ref(), &form.text).await {
        Ok(()) => back_to(id),
        Err(err) => {
            let (status, banner) = surface(&err);
            post_page(&session, status, Some(&banner))
        }
    }
}

#[derive(Deserialize)]
pub struct SecretForm {
    #[serde(default)]
    secret_key: String,
}

pub async fn delete_comment(
    State(state): State<Arc<AppState>>,
    Path((id, index)): Path<(Uuid, usize)>,
    Form(form): Form<SecretForm>,
) -> Response {
    let mut session = PostSession::load(state.store.as_ref(), id).await;
    match session
        .delete_comment(state.store.as_ref(), state.gate.as_ref(), index, &form.secret_key)
        .await
    {
        Ok(()) => back_to(id),
        Err(err) => {
            let (status, banner) = surface(&err);
            post_page(&session, status, Some(&banner))
        }
    }
}

#[derive(Deserialize)]
pub struct EditForm {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image_url: String,
    #[serde(default)]
    secret_key: String,
}

pub async fn save_edit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Form(form): Form<EditForm>,
) -> Response {
    let mut session = PostSession::load(state.store.as_ref(), id).await;
    let draft = PostDraft {
        title: form.title,
        description: form.description,
        image_url: form.image_url,
    };
    match session
        .save_changes(state.store.as_ref(), state.gate.as_ref(), draft, &form.secret_key)
        .await
    {
        Ok(()) => back_to(id),
        Err(err) => {
            let (status, banner) = surface(&err);
            post_page(&session, status, Some(&banner))
        }
    }
}

pub async fn delete_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Form(form): Form<SecretForm>,
) -> Response {
    let mut session = PostSession::load(state.store.as_ref(), id).await;
    match session
        .delete_post(state.store.as_ref(), state.gate.as_ref(), &form.secret_key)
        .await
    {
        Ok(()) => Redirect::to("/").into_response(),
        Err(err) => {
            let (status, banner) = surface(&err);
            post_page(&session, status, Some(&banner))
        }
    }
}
