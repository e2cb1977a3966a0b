//! HTTP adapter for reader comments.

mod dto;
mod handlers;
mod routes;

pub use dto::{CommentsParams, CreateCommentRequest};
pub use routes::comments_routes;
