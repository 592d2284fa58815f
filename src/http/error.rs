//! Error taxonomy for the proxy handler.
//!
//! Every failure path funnels into one tagged enum, and the `IntoResponse`
//! impl is the single place JSON error bodies are constructed. Each variant
//! carries exactly the context its JSON shape needs.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Usage hint returned when the `url` parameter is missing.
pub const USAGE: &str = "/api?url=https://example.com/image.jpg";

/// Errors the proxy handler can surface to the caller.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// No `url` parameter in the query map or the raw query string.
    #[error("Missing required parameter: url")]
    MissingUrl,

    /// The value did not decode or parse into an absolute URL.
    #[error("Invalid URL format")]
    InvalidUrl { provided: String },

    /// Upstream was reachable but answered outside the success range.
    #[error("Failed to fetch image from target server")]
    Upstream {
        status: StatusCode,
        status_text: String,
        target_url: String,
    },

    /// Transport failure or any other unexpected error.
    #[error("Internal server error")]
    Internal {
        message: String,
        details: Option<String>,
    },
}

impl ProxyError {
    /// Wrap an unexpected failure.
    ///
    /// The debug representation of the error chain (the closest Rust
    /// analogue of a stack trace) is attached only in development mode.
    pub fn internal<E>(err: E, development: bool) -> Self
    where
        E: std::fmt::Display + std::fmt::Debug,
    {
        Self::Internal {
            details: development.then(|| format!("{err:?}")),
            message: err.to_string(),
        }
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingUrl | Self::InvalidUrl { .. } => StatusCode::BAD_REQUEST,
            Self::Upstream { status, .. } => *status,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error = self.to_string();
        let body = match self {
            Self::MissingUrl => json!({
                "error": error,
                "usage": USAGE,
            }),
            Self::InvalidUrl { provided } => json!({
                "error": error,
                "provided": provided,
            }),
            Self::Upstream {
                status,
                status_text,
                target_url,
            } => json!({
                "error": error,
                "status": status.as_u16(),
                "statusText": status_text,
                "targetUrl": target_url,
            }),
            Self::Internal { message, details } => match details {
                Some(details) => json!({
                    "error": error,
                    "message": message,
                    "details": details,
                }),
                None => json!({
                    "error": error,
                    "message": message,
                }),
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ProxyError::MissingUrl.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ProxyError::InvalidUrl {
                provided: "x".into()
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ProxyError::Upstream {
                status: StatusCode::NOT_FOUND,
                status_text: "Not Found".into(),
                target_url: "https://example.com/pic.jpg".into(),
            }
            .status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ProxyError::Internal {
                message: "boom".into(),
                details: None,
            }
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ProxyError::MissingUrl.to_string(),
            "Missing required parameter: url"
        );
        assert_eq!(
            ProxyError::InvalidUrl {
                provided: "not a url".into()
            }
            .to_string(),
            "Invalid URL format"
        );
    }

    #[test]
    fn test_details_gated_on_development() {
        let hidden = ProxyError::internal("connection refused", false);
        match hidden {
            ProxyError::Internal { details, .. } => assert!(details.is_none()),
            other => panic!("unexpected variant: {other:?}"),
        }

        let shown = ProxyError::internal("connection refused", true);
        match shown {
            ProxyError::Internal { message, details } => {
                assert_eq!(message, "connection refused");
                assert!(details.is_some());
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
