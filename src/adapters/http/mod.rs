//! HTTP adapters - REST API implementations.
//!
//! Each module has its own dto/handlers/routes split; `router` assembles
//! them with the middleware stack.

pub mod comments;
pub mod error;
pub mod feed;
pub mod notify;
pub mod posts;
pub mod router;
pub mod state;
pub mod weather;

pub use error::{ApiError, ErrorResponse};
pub use router::{api_routes, build_router};
pub use state::AppState;
