//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, dispatch handler)
//!     → routing (classify: Api | Preflight | StaticAsset | SpaFallback)
//!     → request.rs (body cap + buffering, API writes only)
//!     → proxy / static_files / response.rs (preflight)
//!     → policy.rs (CORS + Cache-Control, exactly once)
//!     → Send to client
//! ```

pub mod policy;
pub mod request;
pub mod response;
pub mod server;

pub use server::{AppState, EdgeServer};
