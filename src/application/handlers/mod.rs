//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod comments;
pub mod feed;
pub mod notify;
pub mod posts;

pub use comments::{CommentsError, CreateCommentCommand, CreateCommentHandler, ListCommentsHandler};
pub use feed::{FeedError, GenerateFeedHandler};
pub use notify::{
    NotifyError, NotifySubscribersCommand, NotifySubscribersHandler, NotifySubscribersResult,
};
pub use posts::{GetPostsHandler, GetPostsResult, ListTagsHandler, PostsError};
