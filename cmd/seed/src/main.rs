//! Inserts a handful of sample posts through the store port.
//!
//! Intended for a fresh development collection: `cargo run -p seed`. The
//! printed secret keys are the only record of them.

use anyhow::Context;
use domains::models::NewPost;
use domains::traits::PostStore;
use storage_adapters::{RestPostStore, RestStoreConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let settings = configs::load().context("failed to load settings")?;
    let store = RestPostStore::new(RestStoreConfig {
        base_url: settings.store.base_url.clone(),
        api_key: settings.store.api_key.clone(),
    });

    let samples = [
        NewPost::new(
            "Welcome to AnimeHub".into(),
            "Introduce yourself and share what you are watching this season.".into(),
            None,
            "0000".into(),
            None,
        ),
        NewPost::new(
            "Naruto rewatch thread".into(),
            "Starting from episode 1, skipping nothing. Join in.".into(),
            Some("https://example.com/naruto.jpg".into()),
            "1111".into(),
            None,
        ),
        NewPost::new(
            "One Piece is peak fiction".into(),
            "A thousand episodes in and still going. Change my mind.".into(),
            Some("https://example.com/one-piece.jpg".into()),
            "2222".into(),
            None,
        ),
    ];

    let mut first_id = None;
    for new_post in samples {
        let post = store.insert(new_post).await.context("seed insert failed")?;
        first_id.get_or_insert(post.id);
        println!("seeded \"{}\" ({})  secret key: {}", post.title, post.id, post.secret_key);
    }

    // One reply referencing the welcome post, to exercise the side panel.
    if let Some(welcome) = first_id {
        let reply = NewPost::new(
            "Season picks, as requested".into(),
            "Replying to the welcome thread with this season's highlights.".into(),
            None,
            "3333".into(),
            Some(welcome),
        );
        let post = store.insert(reply).await.context("seed insert failed")?;
        println!("seeded \"{}\" ({})  secret key: {}", post.title, post.id, post.secret_key);
    }

    Ok(())
}
