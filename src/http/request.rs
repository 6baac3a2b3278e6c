//! Inbound request handling.
//!
//! # Responsibilities
//! - Enforce the body size cap before reading
//! - Buffer the whole request body
//!
//! # Design Decisions
//! - The declared `Content-Length` is checked first so an oversized upload is
//!   refused without reading it
//! - The cap is enforced again while reading, for bodies without a length

use axum::body::{Body, Bytes};
use axum::http::{header, HeaderMap};

use crate::error::EdgeError;

/// Declared body length, if present and well-formed.
pub fn content_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(header::CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

/// Read the full request body, at most `limit` bytes.
pub async fn read_body(headers: &HeaderMap, body: Body, limit: usize) -> Result<Bytes, EdgeError> {
    if let Some(size) = content_length(headers) {
        if size > limit as u64 {
            return Err(EdgeError::PayloadTooLarge { size, limit });
        }
    }

    axum::body::to_bytes(body, limit)
        .await
        .map_err(|e| EdgeError::RequestBody(e.to_string()))
}
