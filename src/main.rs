//! SPA edge server.
//!
//! Serves a single-page application's build output and forwards `/api/`
//! traffic to one backend origin.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ net::listener ──▶ http::server ──▶ routing::router
//!                                                            │
//!                       ┌────────────────┬───────────────────┼──────────────┐
//!                       ▼                ▼                   ▼              ▼
//!                  proxy::forwarder  static_files      local preflight   404 reject
//!                       │           (asset | shell)          │              │
//!                       ▼                ▼                   ▼              ▼
//!     Client Response ◀──────────── http::policy (CORS + Cache-Control) ◀───┘
//! ```
//!
//! Configuration is read from `edge.toml` (or `$EDGE_CONFIG`); every field
//! has a default, so the server starts without a file.

use std::process::ExitCode;

use spa_edge::config::{config_path, load_or_default, EdgeConfig};
use spa_edge::lifecycle::{startup, wait_for_shutdown_signal, Shutdown, StaticRoot};
use spa_edge::net::Listener;
use spa_edge::observability::logging;
use spa_edge::{AppState, EdgeServer};

#[tokio::main]
async fn main() -> ExitCode {
    let path = config_path();
    let config = match load_or_default(&path) {
        Ok(config) => {
            logging::init(&config.observability.log_level);
            config
        }
        Err(e) => {
            logging::init(&EdgeConfig::default().observability.log_level);
            tracing::error!(path = %path.display(), "Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!(
        bind_address = %config.listener.bind_address,
        backend = %config.backend.origin,
        max_body_bytes = config.proxy.max_body_bytes,
        "Configuration loaded"
    );

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            tracing::error!(error = %e, "Cannot determine working directory");
            return ExitCode::FAILURE;
        }
    };
    let root = StaticRoot::detect(&cwd, &config.static_files);
    startup::report_build_output(&cwd, &config.static_files, &root);

    let state = match AppState::from_config(&config, &root) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(static_root = %root.dir.display(), "Startup failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let listener = match Listener::bind(&config.listener).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let address = match listener.local_addr() {
        Ok(address) => address,
        Err(e) => {
            tracing::error!(error = %e, "Listener has no local address");
            return ExitCode::FAILURE;
        }
    };

    startup::log_banner(address, state.forwarder.origin(), &root);

    let shutdown = Shutdown::new();
    let stop = shutdown.subscribe();
    tokio::spawn(async move {
        wait_for_shutdown_signal().await;
        shutdown.trigger();
    });

    match EdgeServer::new(state).run(listener.into_inner(), stop).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Server error");
            ExitCode::FAILURE
        }
    }
}
