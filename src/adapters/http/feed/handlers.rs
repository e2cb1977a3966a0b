//! HTTP handler for `/feed.xml`.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::adapters::http::state::AppState;

pub const FEED_CONTENT_TYPE: &str = "application/xml; charset=utf-8";
pub const FEED_CACHE_CONTROL: &str = "max-age=0, s-maxage=3600";

/// GET /feed.xml - RSS 2.0 feed of published posts
///
/// Failures answer plain text rather than the JSON envelope.
pub async fn get_feed(State(state): State<AppState>) -> Response {
    match state.feed_handler().handle().await {
        Ok(xml) => (
            [
                (header::CONTENT_TYPE, FEED_CONTENT_TYPE),
                (header::CACHE_CONTROL, FEED_CACHE_CONTROL),
            ],
            xml,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to generate RSS feed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                "Error generating RSS feed",
            )
                .into_response()
        }
    }
}
