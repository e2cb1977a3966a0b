//! HTTP adapter for the RSS feed.

mod handlers;
mod routes;

pub use routes::feed_routes;
