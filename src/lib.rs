//! SPA edge server library.
//!
//! Serves a single-page application's built assets and forwards `/api/`
//! traffic to one backend origin.

pub mod config;
pub mod error;
pub mod http;
pub mod net;
pub mod proxy;
pub mod routing;
pub mod static_files;
pub mod lifecycle;
pub mod observability;
pub mod resilience;

pub use config::schema::EdgeConfig;
pub use error::EdgeError;
pub use http::{AppState, EdgeServer};
pub use lifecycle::Shutdown;
