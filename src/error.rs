//! Error handling for scratchpad
//!
//! Defines custom error types and establishes a unified Result type
//! using anyhow for context chaining and error propagation.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Core error types shared by the scrapers, the dashboard and the exercises
#[derive(Error, Debug)]
pub enum ScratchError {
    #[error("missing element: {0}")]
    MissingElement(String),

    #[error("parse error: {0}")]
    ParseError(String),

    #[error("request to {url} failed with status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("upload error: {0}")]
    Upload(String),

    #[error("validation error: {0}")]
    ValidationError(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error")]
    Io(#[from] std::io::Error),
}

/// Result type alias for scratchpad operations
pub type Result<T> = anyhow::Result<T>;

/// Error returned by dashboard handlers.
///
/// Wraps an `anyhow::Error` so handlers can use `?` on anything; the HTTP
/// status is picked from the underlying `ScratchError` when there is one.
#[derive(Debug)]
pub struct HttpError(anyhow::Error);

impl<E> From<E> for HttpError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl HttpError {
    fn status(&self) -> StatusCode {
        match self.0.downcast_ref::<ScratchError>() {
            Some(ScratchError::Upload(_)) | Some(ScratchError::ValidationError(_)) => {
                StatusCode::BAD_REQUEST
            }
            Some(ScratchError::MissingElement(_)) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Request error: {:#}", self.0);
            "Internal server error".to_string()
        } else {
            tracing::debug!("Rejected request: {:#}", self.0);
            self.0.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_formatting_is_readable() {
        let err = ScratchError::MissingElement("#productTitle".to_string());
        assert_eq!(err.to_string(), "missing element: #productTitle");

        let err = ScratchError::HttpStatus {
            url: "http://example.com".to_string(),
            status: 503,
        };
        assert_eq!(
            err.to_string(),
            "request to http://example.com failed with status 503"
        );
    }

    #[test]
    fn test_anyhow_context_chains_errors() {
        use anyhow::Context;
        let result: Result<()> =
            Err(anyhow::anyhow!("original error")).context("failed to fetch page");
        match result {
            Err(e) => {
                let msg = e.to_string();
                assert!(msg.contains("failed to fetch page"));
                let debug_msg = format!("{:?}", e);
                assert!(debug_msg.contains("original error"));
            }
            Ok(_) => panic!("expected error"),
        }
    }

    #[test]
    fn test_http_error_status_mapping() {
        let upload: HttpError = anyhow::Error::from(ScratchError::Upload("bad".into())).into();
        assert_eq!(upload.status(), StatusCode::BAD_REQUEST);

        let other: HttpError = anyhow::anyhow!("boom").into();
        assert_eq!(other.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
