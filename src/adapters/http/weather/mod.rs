//! HTTP adapter for the weather passthrough.

mod handlers;
mod routes;

pub use routes::weather_routes;
