//! HTTP adapter for the newsletter notify hook.

mod dto;
mod handlers;
mod routes;

pub use dto::{NotifyRequest, NotifyResponse};
pub use routes::notify_routes;
