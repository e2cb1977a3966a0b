//! Top-level router: API routes, feed, health and the middleware stack.

use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::comments::comments_routes;
use super::feed::feed_routes;
use super::notify::notify_routes;
use super::posts::posts_routes;
use super::state::AppState;
use super::weather::weather_routes;
use crate::config::ServerConfig;

/// Routes mounted under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(posts_routes())
        .merge(comments_routes())
        .merge(notify_routes())
        .merge(weather_routes())
}

/// Builds the application with its middleware stack.
///
/// # Routes
/// - `/api/*` - JSON API
/// - `GET /feed.xml` - RSS feed
/// - `GET /health` - liveness check
pub fn build_router(state: AppState, server: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes())
        .merge(feed_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(server))
                .layer(TimeoutLayer::new(server.request_timeout())),
        )
        .with_state(state)
}

/// CORS from `server.cors_origins`; no origins means same-origin only.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return CorsLayer::new();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "lulu-blog",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
