//! Uniform `{"error": "<message>"}` responses for JSON routes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::{CommentsError, NotifyError, PostsError};
use crate::ports::{CommentStoreError, PostSourceError, WeatherError};

/// Error body shared by every JSON route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Errors surfaced by HTTP handlers.
///
/// Server-side failures are logged here; the client only sees the message.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized,
    NotFound(String),
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::Unauthorized => "Unauthorized",
            ApiError::BadRequest(m) | ApiError::NotFound(m) | ApiError::Internal(m) => m,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ErrorResponse::new(self.message()))).into_response()
    }
}

pub(crate) const GITHUB_FAILURE: &str = "Failed to fetch data from GitHub";

impl From<PostSourceError> for ApiError {
    fn from(err: PostSourceError) -> Self {
        tracing::error!(error = %err, "GitHub request failed");
        ApiError::internal(GITHUB_FAILURE)
    }
}

impl From<PostsError> for ApiError {
    fn from(err: PostsError) -> Self {
        match err {
            PostsError::NotFound(number) => ApiError::NotFound(format!("Post #{} not found", number)),
            PostsError::Source(e) => e.into(),
        }
    }
}

impl From<CommentsError> for ApiError {
    fn from(err: CommentsError) -> Self {
        match err {
            CommentsError::Validation(e) => ApiError::BadRequest(e.to_string()),
            CommentsError::Store(e) => e.into(),
        }
    }
}

impl From<CommentStoreError> for ApiError {
    fn from(err: CommentStoreError) -> Self {
        tracing::error!(error = %err, "Comment store failure");
        match err {
            CommentStoreError::NotConfigured(_) => ApiError::internal("Comment storage is not configured"),
            _ => ApiError::internal("Failed to process comments"),
        }
    }
}

impl From<NotifyError> for ApiError {
    fn from(err: NotifyError) -> Self {
        match err {
            NotifyError::PostNotFound(_) => ApiError::NotFound(err.to_string()),
            NotifyError::NotConfigured => ApiError::internal(err.to_string()),
            NotifyError::Source(e) => e.into(),
            NotifyError::Render(e) => {
                tracing::error!(error = %e, "Failed to render post for newsletter");
                ApiError::internal("Failed to render post")
            }
            NotifyError::Email(e) => {
                tracing::error!(error = %e, "Newsletter delivery failed");
                ApiError::internal("Failed to send newsletter email")
            }
        }
    }
}

impl From<WeatherError> for ApiError {
    fn from(err: WeatherError) -> Self {
        tracing::error!(error = %err, "Weather request failed");
        match err {
            WeatherError::NotConfigured => ApiError::internal(err.to_string()),
            _ => ApiError::internal("Failed to fetch weather data"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{PostNumber, ValidationError};

    #[test]
    fn statuses_follow_the_taxonomy() {
        assert_eq!(ApiError::bad_request("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::internal("x").status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn upstream_details_are_not_exposed() {
        let err = ApiError::from(PostSourceError::Upstream {
            status: 502,
            message: "secret internals".to_string(),
        });
        assert_eq!(err.message(), GITHUB_FAILURE);
    }

    #[test]
    fn missing_post_maps_to_not_found() {
        let number = PostNumber::new(5).unwrap();
        let err = ApiError::from(PostsError::NotFound(number));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Post #5 not found");

        let err = ApiError::from(NotifyError::PostNotFound(number));
        assert_eq!(err.message(), "Post #5 not found");
    }

    #[test]
    fn validation_maps_to_bad_request() {
        let err = ApiError::from(CommentsError::Validation(ValidationError::too_short("content", 5)));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Field 'content' must be at least 5 characters");
    }

    #[test]
    fn missing_email_token_keeps_its_message() {
        let err = ApiError::from(NotifyError::NotConfigured);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "BUTTONDOWN_TOKEN is not configured");
    }
}
