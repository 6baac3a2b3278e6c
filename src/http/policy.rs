//! Response header policy.
//!
//! Applied exactly once per response, after the handler has produced it:
//! the CORS headers on everything, `Cache-Control` only on static and
//! shell responses.

use axum::http::{header, HeaderMap, HeaderValue, StatusCode};

use crate::routing::{CacheTier, Route};

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";

/// `Cache-Control` value for a cache tier.
pub fn cache_control(tier: CacheTier) -> &'static str {
    match tier {
        CacheTier::Long => "public, max-age=31536000, immutable",
        CacheTier::Short => "public, max-age=86400",
        CacheTier::NoCache => "no-cache, must-revalidate",
    }
}

/// Apply the CORS and cache headers for a finished response.
///
/// `route` is `None` when the request was rejected before classification
/// produced a route. Unsuccessful static responses are never cacheable.
pub fn apply_response_policy(headers: &mut HeaderMap, route: Option<Route>, status: StatusCode) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );

    if let Some(tier) = route.and_then(Route::cache_tier) {
        let tier = if status.is_success() {
            tier
        } else {
            CacheTier::NoCache
        };
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static(cache_control(tier)),
        );
    }
}
