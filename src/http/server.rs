//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Create the Axum router with a single dispatch handler
//! - Classify each request and hand it to the forwarder, the static
//!   responder, or the local preflight answer
//! - Apply the response header policy once per response
//! - Serve until the shutdown broadcast fires

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{uri::PathAndQuery, Request},
    response::{IntoResponse, Response},
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::validation::ValidationError;
use crate::config::{ConfigError, EdgeConfig};
use crate::error::EdgeError;
use crate::http::request::read_body;
use crate::http::response::{finalize, preflight};
use crate::lifecycle::StaticRoot;
use crate::observability::RequestLog;
use crate::proxy::{method_carries_body, BackendOrigin, Forwarder, ProxyExchange};
use crate::routing::{Route, Router as EdgeRouter};
use crate::static_files::StaticResponder;

/// Application state injected into the handler.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<EdgeRouter>,
    pub forwarder: Arc<Forwarder>,
    pub responder: Arc<StaticResponder>,
    pub max_body_bytes: usize,
}

impl AppState {
    /// Resolve validated config and the detected static root into shared state.
    pub fn from_config(config: &EdgeConfig, root: &StaticRoot) -> Result<Self, ConfigError> {
        let origin: BackendOrigin = config.backend.origin.parse().map_err(|e| {
            ConfigError::Validation(vec![ValidationError {
                field: "backend.origin",
                message: format!("{e}"),
            }])
        })?;
        let responder = StaticResponder::new(&root.dir).map_err(ConfigError::Io)?;

        Ok(Self {
            router: Arc::new(EdgeRouter::new()),
            forwarder: Arc::new(Forwarder::new(origin)),
            responder: Arc::new(responder),
            max_body_bytes: config.proxy.max_body_bytes,
        })
    }
}

/// HTTP server for the edge.
pub struct EdgeServer {
    router: axum::Router,
}

impl EdgeServer {
    /// Create a server around prepared state.
    pub fn new(state: AppState) -> Self {
        let router = axum::Router::new()
            .fallback(dispatch)
            .with_state(state)
            .layer(TraceLayer::new_for_http());
        Self { router }
    }

    /// The Axum router, for driving the server without a socket.
    pub fn router(&self) -> axum::Router {
        self.router.clone()
    }

    /// Serve on `listener` until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::debug!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

/// Single entry point for every request.
async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let log = RequestLog::start(&method, &path);

    let (route, result) = match state.router.classify(&method, &path) {
        Ok(route) => (Some(route), handle(&state, route, request).await),
        Err(e) => (None, Err(e)),
    };

    let label = route.map(Route::label).unwrap_or("reject");
    let response = match result {
        Ok(response) => {
            log.finish(label, response.status());
            response
        }
        Err(e) => {
            log.fail(label, &e);
            e.into_response()
        }
    };

    finalize(response, route)
}

async fn handle(state: &AppState, route: Route, request: Request<Body>) -> Result<Response, EdgeError> {
    match route {
        Route::Preflight => Ok(preflight()),
        Route::Api => forward(state, request).await,
        Route::StaticAsset(_) => state.responder.serve_asset(request.uri().path()).await,
        Route::SpaFallback => state.responder.serve_shell().await,
    }
}

async fn forward(state: &AppState, request: Request<Body>) -> Result<Response, EdgeError> {
    let (parts, body) = request.into_parts();

    let body = if method_carries_body(&parts.method) {
        Some(read_body(&parts.headers, body, state.max_body_bytes).await?)
    } else {
        None
    };
    let target = parts
        .uri
        .path_and_query()
        .cloned()
        .unwrap_or_else(|| PathAndQuery::from_static("/"));

    state
        .forwarder
        .exchange(ProxyExchange {
            method: parts.method,
            target,
            headers: parts.headers,
            body,
        })
        .await
}
