//! Post handlers.
//!
//! ## Queries
//! - Get posts (all, by tag, or one by number)
//! - List tags across published posts

mod get_posts;
mod list_tags;

pub use get_posts::{GetPostsHandler, GetPostsResult, PostsError};
pub use list_tags::ListTagsHandler;
