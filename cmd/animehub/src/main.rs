//! # AnimeHub Binary
//!
//! The entry point that assembles the board based on compile-time features:
//! settings, tracing, the chosen store adapter, the plaintext access gate,
//! and the axum surface.

use std::sync::Arc;

use anyhow::Context;
use api_adapters::{router, AppState};
use auth_adapters::PlainSecretGate;
use domains::traits::PostStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[cfg(feature = "store-rest")]
use storage_adapters::{RestPostStore, RestStoreConfig};

#[cfg(all(feature = "store-memory", not(feature = "store-rest")))]
use storage_adapters::MemoryPostStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = configs::load().context("failed to load settings")?;

    // 1. Store implementation
    #[cfg(feature = "store-rest")]
    let store: Arc<dyn PostStore> = Arc::new(RestPostStore::new(RestStoreConfig {
        base_url: settings.store.base_url.clone(),
        api_key: settings.store.api_key.clone(),
    }));

    #[cfg(all(feature = "store-memory", not(feature = "store-rest")))]
    let store: Arc<dyn PostStore> = Arc::new(MemoryPostStore::new());

    // 2. Access gate: the board's only authorization scheme
    let state = Arc::new(AppState {
        store,
        gate: Arc::new(PlainSecretGate::new()),
    });

    // 3. Serve
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(&settings.server.bind)
        .await
        .with_context(|| format!("failed to bind {}", settings.server.bind))?;
    info!("🚀 AnimeHub listening on http://{}", settings.server.bind);
    axum::serve(listener, app).await?;

    Ok(())
}
