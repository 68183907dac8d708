//! Error type for lookups that can miss.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Lookup failures surfaced to HTTP clients as `404 Not Found`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("organization not found: {0}")]
    OrganizationNotFound(String),
    #[error("chat not found: {0}")]
    ChatNotFound(String),
    #[error("session not found: {0}")]
    SessionNotFound(String),
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "Lookup failed");
        (StatusCode::NOT_FOUND, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_to_not_found() {
        let resp = ChatError::ChatNotFound("chat-9".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_display() {
        let err = ChatError::OrganizationNotFound("42".to_string());
        assert_eq!(err.to_string(), "organization not found: 42");
    }
}
