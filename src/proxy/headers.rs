//! Header filtering across the proxy boundary.
//!
//! # Responsibilities
//! - Strip hop-by-hop headers from the request sent to the backend
//! - Strip connection-management headers from the relayed response
//! - Default `Content-Type` on write requests
//!
//! # Design Decisions
//! - Bodies are fully buffered on both sides, so framing headers are
//!   recomputed by the HTTP layer instead of copied
//! - Duplicate headers (e.g. `Set-Cookie`) are preserved with `append`

use axum::http::header::{self, HeaderMap, HeaderName, HeaderValue};

/// Default content type for forwarded bodies that declare none.
pub const DEFAULT_BODY_CONTENT_TYPE: &str = "application/json";

/// Headers scoped to a single connection; never forwarded to the backend.
const HOP_BY_HOP: [HeaderName; 5] = [
    header::CONNECTION,
    header::TRANSFER_ENCODING,
    header::TE,
    header::TRAILER,
    header::UPGRADE,
];

fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP.contains(name) || name == "keep-alive" || name == "proxy-connection"
}

/// Copy inbound headers for the backend request.
///
/// `Content-Length` is dropped too: the outbound body is re-framed from the
/// buffered bytes.
pub fn forward_request_headers(inbound: &HeaderMap, has_body: bool) -> HeaderMap {
    let mut outbound = HeaderMap::with_capacity(inbound.len() + 1);
    for (name, value) in inbound {
        if is_hop_by_hop(name) || name == header::CONTENT_LENGTH {
            continue;
        }
        outbound.append(name.clone(), value.clone());
    }
    if has_body && !outbound.contains_key(header::CONTENT_TYPE) {
        outbound.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(DEFAULT_BODY_CONTENT_TYPE),
        );
    }
    outbound
}

/// Copy backend response headers for the client.
///
/// Drops `Connection` and `Transfer-Encoding`; for a 304 also drops
/// `Content-Length`.
pub fn relay_response_headers(backend: &HeaderMap, not_modified: bool) -> HeaderMap {
    let mut relayed = HeaderMap::with_capacity(backend.len());
    for (name, value) in backend {
        if name == header::CONNECTION || name == header::TRANSFER_ENCODING {
            continue;
        }
        if not_modified && name == header::CONTENT_LENGTH {
            continue;
        }
        relayed.append(name.clone(), value.clone());
    }
    relayed
}
