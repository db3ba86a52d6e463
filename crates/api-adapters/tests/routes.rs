//! Router wiring smoke tests over the in-memory store.

use std::sync::Arc;

use api_adapters::{router, AppState};
use auth_adapters::PlainSecretGate;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domains::models::NewPost;
use domains::traits::PostStore;
use storage_adapters::MemoryPostStore;
use tower::util::ServiceExt;

fn app(store: Arc<MemoryPostStore>) -> Router {
    router(Arc::new(AppState {
        store,
        gate: Arc::new(PlainSecretGate::new()),
    }))
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn empty_board_renders_the_no_posts_message() {
    let store = Arc::new(MemoryPostStore::new());
    let (status, body) = get(app(store), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No posts to show."));
}

#[tokio::test]
async fn index_lists_a_seeded_post() {
    let store = Arc::new(MemoryPostStore::new());
    store
        .insert(NewPost::new(
            "Naruto".into(),
            String::new(),
            None,
            "1234".into(),
            None,
        ))
        .await
        .unwrap();
    let (status, body) = get(app(store), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Naruto"));
    assert!(!body.contains("No posts to show."));
}

#[tokio::test]
async fn unknown_post_id_renders_the_not_found_view() {
    let store = Arc::new(MemoryPostStore::new());
    let (status, body) = get(
        app(store),
        "/posts/00000000-0000-0000-0000-000000000000",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Post not found"));
}

#[tokio::test]
async fn create_form_renders() {
    let store = Arc::new(MemoryPostStore::new());
    let (status, body) = get(app(store), "/create").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("New post"));
    assert!(body.contains("secret_key"));
}
