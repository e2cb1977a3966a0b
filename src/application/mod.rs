//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    CommentsError, CreateCommentCommand, CreateCommentHandler, FeedError, GenerateFeedHandler,
    GetPostsHandler, GetPostsResult, ListCommentsHandler, ListTagsHandler, NotifyError,
    NotifySubscribersCommand, NotifySubscribersHandler, NotifySubscribersResult, PostsError,
};
