//! Locally generated responses.
//!
//! # Responsibilities
//! - Answer CORS preflight requests without touching the backend
//! - Finalize every response through the header policy

use axum::body::Body;
use axum::http::StatusCode;
use axum::response::Response;

use crate::http::policy::apply_response_policy;
use crate::routing::Route;

/// 200 with an empty body; the header policy adds the CORS headers.
pub fn preflight() -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::OK;
    response
}

/// Apply the header policy to a finished response.
pub fn finalize(mut response: Response, route: Option<Route>) -> Response {
    let status = response.status();
    apply_response_policy(response.headers_mut(), route, status);
    response
}
