//! HTTP handler for the notify hook.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::Json;
use secrecy::ExposeSecret;
use subtle::ConstantTimeEq;

use super::dto::{NotifyRequest, NotifyResponse};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;

/// POST /api/notify - email subscribers about a post
///
/// Checks run in order: bearer secret, JSON body, `issueNumber`, then the
/// application flow.
pub async fn notify_subscribers(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<NotifyResponse>, ApiError> {
    if let Some(secret) = state.notify_secret.as_ref() {
        let expected = format!("Bearer {}", secret.expose_secret());
        let provided = headers
            .get(header::AUTHORIZATION)
            .map(|v| v.as_bytes())
            .unwrap_or_default();
        if !bool::from(provided.ct_eq(expected.as_bytes())) {
            tracing::warn!("Rejected notify request with bad credentials");
            return Err(ApiError::Unauthorized);
        }
    }

    let payload: serde_json::Value = serde_json::from_slice(&body)
        .map_err(|_| ApiError::bad_request("Invalid JSON payload"))?;

    let command = NotifyRequest::from_json(&payload)
        .into_command()
        .ok_or_else(|| ApiError::bad_request("issueNumber is required"))?;

    let result = state.notify_handler().handle(command).await?;
    Ok(Json(result.into()))
}
