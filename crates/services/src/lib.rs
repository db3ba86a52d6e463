//! Application workflows for AnimeHub.
//!
//! Everything here operates through the `domains` ports; no workflow knows
//! which store or gate implementation is behind them.

pub mod create;
pub mod feed;
pub mod session;
pub mod timeago;

pub use create::{create_post, CreatePostInput, CreatedPost};
pub use feed::{filter_titles, Feed};
pub use session::{PostDraft, PostSession};
pub use timeago::{time_ago, time_ago_from_now};
