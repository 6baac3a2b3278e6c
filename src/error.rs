//! Request-level error taxonomy.
//!
//! Every variant is terminal for the request it belongs to: it is rendered
//! into a plain-text HTTP response and never escapes the handler.

use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::resilience::timeouts::BACKEND_TIMEOUT_SECS;

/// Errors that end the handling of a single request.
#[derive(Debug, Error)]
pub enum EdgeError {
    /// Method/path combination this server does not serve.
    #[error("Not Found: {method} {path}")]
    RoutingReject { method: Method, path: String },

    /// The backend did not answer within the fixed bound.
    #[error("Backend timeout: request to backend server timed out after {secs} seconds", secs = BACKEND_TIMEOUT_SECS)]
    BackendTimeout,

    /// Connection-level failure reaching the backend.
    #[error("Backend connection error: {0}")]
    BackendUnreachable(String),

    /// Static path does not resolve to a file under the root.
    #[error("File not found: {0}")]
    StaticNotFound(String),

    /// Static file exists but could not be read.
    #[error("Failed to read {path}: {source}")]
    StaticReadFailure {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Declared request body exceeds the configured cap.
    #[error("Request body of {size} bytes exceeds the limit of {limit} bytes")]
    PayloadTooLarge { size: u64, limit: usize },

    /// Request body could not be read from the client.
    #[error("Failed to read request body: {0}")]
    RequestBody(String),
}

impl EdgeError {
    /// HTTP status this error resolves to.
    pub fn status(&self) -> StatusCode {
        match self {
            EdgeError::RoutingReject { .. } | EdgeError::StaticNotFound(_) => StatusCode::NOT_FOUND,
            EdgeError::BackendTimeout => StatusCode::GATEWAY_TIMEOUT,
            EdgeError::BackendUnreachable(_) => StatusCode::BAD_GATEWAY,
            EdgeError::StaticReadFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            EdgeError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            EdgeError::RequestBody(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Short error class used in log fields.
    pub fn class(&self) -> &'static str {
        match self {
            EdgeError::RoutingReject { .. } => "routing_reject",
            EdgeError::BackendTimeout => "backend_timeout",
            EdgeError::BackendUnreachable(_) => "backend_unreachable",
            EdgeError::StaticNotFound(_) => "static_not_found",
            EdgeError::StaticReadFailure { .. } => "static_read_failure",
            EdgeError::PayloadTooLarge { .. } => "payload_too_large",
            EdgeError::RequestBody(_) => "request_body",
        }
    }
}

impl IntoResponse for EdgeError {
    fn into_response(self) -> Response {
        (
            self.status(),
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}
