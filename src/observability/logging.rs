//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once at startup
//! - Emit the per-request entry and completion events
//! - Flag requests slower than the slow-request threshold
//!
//! # Design Decisions
//! - `RUST_LOG` wins over the configured level when set
//! - Every event is a single formatted line, so concurrent requests never
//!   interleave within a line

use std::time::Instant;

use axum::http::{Method, StatusCode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::EdgeError;
use crate::resilience::timeouts::SLOW_REQUEST_THRESHOLD;

/// Default filter directive for a configured level.
pub fn default_filter(level: &str) -> String {
    format!("spa_edge={level},tower_http=warn")
}

/// Install the global subscriber. Call once, from `main`.
pub fn init(level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(level).into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Log context for one request, from entry to outcome.
#[derive(Debug)]
pub struct RequestLog {
    method: Method,
    path: String,
    start: Instant,
}

impl RequestLog {
    /// Record the request's arrival.
    pub fn start(method: &Method, path: &str) -> Self {
        tracing::info!(method = %method, path = %path, "Request received");
        Self {
            method: method.clone(),
            path: path.to_string(),
            start: Instant::now(),
        }
    }

    /// Record a response, including relayed backend error statuses.
    pub fn finish(&self, route: &'static str, status: StatusCode) {
        let elapsed_ms = self.elapsed_ms();
        tracing::info!(
            method = %self.method,
            path = %self.path,
            route,
            status = status.as_u16(),
            elapsed_ms,
            "Request completed"
        );
        self.flag_if_slow(elapsed_ms);
    }

    /// Record a request that ended in an edge-generated error.
    pub fn fail(&self, route: &'static str, err: &EdgeError) {
        let elapsed_ms = self.elapsed_ms();
        let status = err.status().as_u16();
        if err.status().is_server_error() {
            tracing::error!(
                method = %self.method,
                path = %self.path,
                route,
                status,
                error_class = err.class(),
                error = %err,
                elapsed_ms,
                "Request failed"
            );
        } else {
            tracing::warn!(
                method = %self.method,
                path = %self.path,
                route,
                status,
                error_class = err.class(),
                error = %err,
                elapsed_ms,
                "Request failed"
            );
        }
        self.flag_if_slow(elapsed_ms);
    }

    fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    /// Warn when the request ran past the threshold. Returns whether it did.
    fn flag_if_slow(&self, elapsed_ms: u64) -> bool {
        if !is_slow(elapsed_ms) {
            return false;
        }
        tracing::warn!(
            method = %self.method,
            path = %self.path,
            elapsed_ms,
            threshold_ms = SLOW_REQUEST_THRESHOLD.as_millis() as u64,
            "Slow request"
        );
        true
    }
}

/// Strictly longer than the slow-request threshold.
fn is_slow(elapsed_ms: u64) -> bool {
    elapsed_ms > SLOW_REQUEST_THRESHOLD.as_millis() as u64
}
