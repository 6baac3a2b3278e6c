//! Route classification.
//!
//! # Responsibilities
//! - Classify a request by method and path
//! - Attach the cache tier to static routes
//! - Reject method/path combinations that are not served
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - The classification is returned as a value and carried through to the
//!   response header policy; nothing is stashed on the request
//! - Explicit rejection rather than silent default

use axum::http::Method;

use crate::error::EdgeError;
use crate::routing::matcher::{ExtensionMatcher, Matcher, PathPrefixMatcher};

/// Paths under this prefix are forwarded to the backend.
pub const API_PREFIX: &str = "/api/";

/// Paths under this prefix are content-addressed build assets.
pub const ASSETS_PREFIX: &str = "/assets/";

/// File extensions served as static assets.
pub const STATIC_EXTENSIONS: [&str; 12] = [
    ".js", ".css", ".png", ".jpg", ".jpeg", ".gif", ".svg", ".ico", ".woff", ".woff2", ".ttf",
    ".eot",
];

/// Documents under the assets prefix that must still be revalidated.
pub const DOCUMENT_EXTENSIONS: [&str; 2] = [".html", ".htm"];

/// How aggressively a static response may be cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheTier {
    /// Hashed build output; cache for a year.
    Long,
    /// Other static files; cache for a day.
    Short,
    /// HTML and the SPA shell; always revalidate.
    NoCache,
}

/// The handling mode chosen for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Forward to the backend origin.
    Api,
    /// Answer a CORS preflight locally.
    Preflight,
    /// Serve a file from the static root.
    StaticAsset(CacheTier),
    /// Serve the SPA shell in place of the requested path.
    SpaFallback,
}

impl Route {
    /// Cache tier of the resource this route serves, if it serves one.
    pub fn cache_tier(self) -> Option<CacheTier> {
        match self {
            Route::StaticAsset(tier) => Some(tier),
            Route::SpaFallback => Some(CacheTier::NoCache),
            Route::Api | Route::Preflight => None,
        }
    }

    /// Label used in log fields.
    pub fn label(self) -> &'static str {
        match self {
            Route::Api => "api",
            Route::Preflight => "preflight",
            Route::StaticAsset(_) => "static",
            Route::SpaFallback => "spa_fallback",
        }
    }
}

/// Request classifier, compiled once at startup.
#[derive(Debug, Clone)]
pub struct Router {
    api: PathPrefixMatcher,
    assets: PathPrefixMatcher,
    extensions: ExtensionMatcher,
    documents: ExtensionMatcher,
}

impl Router {
    /// Build the router with the fixed prefixes and extension set.
    pub fn new() -> Self {
        Self {
            api: PathPrefixMatcher::new(API_PREFIX),
            assets: PathPrefixMatcher::new(ASSETS_PREFIX),
            extensions: ExtensionMatcher::new(STATIC_EXTENSIONS),
            documents: ExtensionMatcher::new(DOCUMENT_EXTENSIONS),
        }
    }

    /// Classify a request. `path` is the URI path without the query string.
    pub fn classify(&self, method: &Method, path: &str) -> Result<Route, EdgeError> {
        if *method == Method::OPTIONS {
            return Ok(Route::Preflight);
        }

        if self.api.matches(path) {
            return if is_proxied_method(method) {
                Ok(Route::Api)
            } else {
                Err(reject(method, path))
            };
        }

        if *method != Method::GET {
            return Err(reject(method, path));
        }

        if self.assets.matches(path) {
            // HTML is never content-addressed, even under the assets prefix.
            if self.documents.matches(path) {
                return Ok(Route::StaticAsset(CacheTier::NoCache));
            }
            return Ok(Route::StaticAsset(CacheTier::Long));
        }
        if self.extensions.matches(path) {
            return Ok(Route::StaticAsset(CacheTier::Short));
        }

        Ok(Route::SpaFallback)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

/// Methods the forwarder relays to the backend.
fn is_proxied_method(method: &Method) -> bool {
    matches!(
        *method,
        Method::GET | Method::POST | Method::PUT | Method::DELETE
    )
}

fn reject(method: &Method, path: &str) -> EdgeError {
    EdgeError::RoutingReject {
        method: method.clone(),
        path: path.to_string(),
    }
}
