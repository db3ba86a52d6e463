//! Listing workflow: fetch-on-sort, filter-in-place.
//!
//! Changing the sort key is a full re-fetch through the store; changing the
//! search query only re-runs the title match over the already-held set.

use domains::error::Result;
use domains::models::{PostSummary, SortKey};
use domains::traits::PostStore;

/// The browsable feed held by the list view.
#[derive(Debug, Default)]
pub struct Feed {
    posts: Vec<PostSummary>,
    query: String,
    sort: SortKey,
}

impl Feed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Re-fetches the full set ordered by `sort`. The held set is replaced
    /// only on success; a failed fetch leaves the previous posts visible.
    pub async fn refresh(&mut self, store: &dyn PostStore, sort: SortKey) -> Result<()> {
        let posts = store.list(sort).await?;
        self.sort = sort;
        self.posts = posts;
        Ok(())
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// The posts currently matching the query, in fetched order.
    pub fn visible(&self) -> Vec<&PostSummary> {
        filter_titles(&self.posts, &self.query)
    }
}

/// Case-insensitive substring match of `query` against post titles,
/// preserving the order of `posts`. An empty query matches everything.
pub fn filter_titles<'a>(posts: &'a [PostSummary], query: &str) -> Vec<&'a PostSummary> {
    let needle = query.to_lowercase();
    posts
        .iter()
        .filter(|p| p.title.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use domains::error::AppError;
    use domains::traits::MockPostStore;
    use uuid::Uuid;

    fn summary(title: &str) -> PostSummary {
        PostSummary {
            id: Uuid::now_v7(),
            title: title.to_string(),
            created_at: Utc::now(),
            upvotes: 0,
        }
    }

    #[test]
    fn filter_is_case_insensitive_and_order_preserving() {
        let posts = vec![
            summary("Naruto"),
            summary("One Piece"),
            summary("Naruto Shippuden"),
        ];
        let hits = filter_titles(&posts, "Nar");
        let titles: Vec<_> = hits.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Naruto", "Naruto Shippuden"]);

        let hits = filter_titles(&posts, "naRUTO");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn empty_query_matches_everything() {
        let posts = vec![summary("a"), summary("b")];
        assert_eq!(filter_titles(&posts, "").len(), 2);
    }

    #[test]
    fn no_match_is_empty() {
        let posts = vec![summary("Naruto")];
        assert!(filter_titles(&posts, "Bleach").is_empty());
    }

    #[tokio::test]
    async fn refresh_replaces_set_only_on_success() {
        let mut store = MockPostStore::new();
        store
            .expect_list()
            .times(1)
            .returning(|_| Ok(vec![]));
        let mut feed = Feed::new();
        feed.refresh(&store, SortKey::Newest).await.unwrap();

        // Seed one post, then fail the next refresh: the old set survives.
        feed.posts = vec![summary("Naruto")];
        let mut failing = MockPostStore::new();
        failing
            .expect_list()
            .times(1)
            .returning(|_| Err(AppError::Transport("connection reset".into())));
        let err = feed.refresh(&failing, SortKey::Upvotes).await.unwrap_err();
        assert!(matches!(err, AppError::Transport(_)));
        assert_eq!(feed.visible().len(), 1);
        assert_eq!(feed.sort(), SortKey::Newest);
    }
}
