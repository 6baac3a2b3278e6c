//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → router.rs (classification)
//!     → matcher.rs (evaluate prefix / extension conditions)
//!     → Return: Route (Api | Preflight | StaticAsset(tier) | SpaFallback)
//!              or RoutingReject (404)
//! ```
//!
//! # Design Decisions
//! - Classification is a pure function of method and path
//! - Routes compiled at startup, immutable at runtime
//! - Deterministic: same input always yields the same route

pub mod matcher;
pub mod router;

pub use router::{CacheTier, Route, Router, API_PREFIX, ASSETS_PREFIX};
