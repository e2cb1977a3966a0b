//! HTTP adapter for posts and tags.

mod dto;
mod handlers;
mod routes;

pub use dto::{PostsParams, PostsResponse};
pub use routes::posts_routes;
