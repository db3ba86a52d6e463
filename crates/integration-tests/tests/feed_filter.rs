//! Feed ordering and title filtering over the in-memory store.

use domains::models::{PostPatch, SortKey};
use domains::traits::PostStore;
use integration_tests::new_post;
use services::Feed;
use storage_adapters::MemoryPostStore;

#[tokio::test]
async fn newest_ordering_is_descending_on_creation_time() {
    let store = MemoryPostStore::new();
    store.insert(new_post("first", "k")).await.unwrap();
    store.insert(new_post("second", "k")).await.unwrap();
    store.insert(new_post("third", "k")).await.unwrap();

    let mut feed = Feed::new();
    feed.refresh(&store, SortKey::Newest).await.unwrap();
    let titles: Vec<_> = feed.visible().iter().map(|p| p.title.clone()).collect();
    assert_eq!(titles, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn upvote_ordering_is_descending_on_count() {
    let store = MemoryPostStore::new();
    let a = store.insert(new_post("modest", "k")).await.unwrap();
    let b = store.insert(new_post("popular", "k")).await.unwrap();
    store.update(a.id, PostPatch::upvotes(2)).await.unwrap();
    store.update(b.id, PostPatch::upvotes(9)).await.unwrap();

    let mut feed = Feed::new();
    feed.refresh(&store, SortKey::Upvotes).await.unwrap();
    let titles: Vec<_> = feed.visible().iter().map(|p| p.title.clone()).collect();
    assert_eq!(titles, vec!["popular", "modest"]);
}

#[tokio::test]
async fn query_narrows_without_refetching() {
    let store = MemoryPostStore::new();
    store.insert(new_post("Naruto", "k")).await.unwrap();
    store.insert(new_post("One Piece", "k")).await.unwrap();
    store.insert(new_post("Naruto Shippuden", "k")).await.unwrap();

    let mut feed = Feed::new();
    feed.refresh(&store, SortKey::Newest).await.unwrap();

    feed.set_query("Nar");
    let titles: Vec<_> = feed.visible().iter().map(|p| p.title.clone()).collect();
    // Both Naruto titles, still in fetched (newest-first) order.
    assert_eq!(titles, vec!["Naruto Shippuden", "Naruto"]);

    feed.set_query("bleach");
    assert!(feed.visible().is_empty());

    feed.set_query("");
    assert_eq!(feed.visible().len(), 3);
}
