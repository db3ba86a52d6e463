//! # api-adapters
//!
//! The web surface of AnimeHub: an axum router over the workflow crates,
//! rendering askama templates. The view-model structs are always available;
//! the router and handlers compile behind the `web-axum` feature.

pub mod views;

#[cfg(feature = "web-axum")]
pub mod handlers;

#[cfg(feature = "web-axum")]
mod web {
    use std::sync::Arc;

    use axum::routing::{get, post};
    use axum::Router;
    use domains::traits::{AccessGate, PostStore};
    use tower_http::trace::TraceLayer;

    use crate::handlers;

    /// State shared across all handlers.
    pub struct AppState {
        pub store: Arc<dyn PostStore>,
        pub gate: Arc<dyn AccessGate>,
    }

    /// Builds the board's route table: list view, create view, and the
    /// single-post view with its mutation endpoints.
    pub fn router(state: Arc<AppState>) -> Router {
        Router::new()
            .route("/", get(handlers::feed_index))
            .route("/create", get(handlers::create_form).post(handlers::create_submit))
            .route("/posts/{id}", get(handlers::view_post))
            .route("/posts/{id}/upvote", post(handlers::upvote))
            .route("/posts/{id}/comments", post(handlers::add_comment))
            .route(
                "/posts/{id}/comments/{index}/delete",
                post(handlers::delete_comment),
            )
            .route("/posts/{id}/edit", post(handlers::save_edit))
            .route("/posts/{id}/delete", post(handlers::delete_post))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}

#[cfg(feature = "web-axum")]
pub use web::{router, AppState};
