//! RSS feed handler.

mod generate_feed;

pub use generate_feed::{FeedError, GenerateFeedHandler, FEED_EXCERPT_CHARS, FEED_GENERATOR};
