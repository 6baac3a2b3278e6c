//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! edge.toml (optional, path from $EDGE_CONFIG)
//!     → loader.rs (parse & deserialize, or defaults)
//!     → validation.rs (semantic checks)
//!     → EdgeConfig (validated, immutable)
//!     → lifecycle::startup turns it into AppState
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; there is no reload
//! - All fields have defaults so the server runs with no file at all
//! - Validation separates syntactic (serde) from semantic checks
//! - Protocol constants (API prefix, backend timeout) are not configurable

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{config_path, load_config, load_or_default, ConfigError};
pub use schema::EdgeConfig;
pub use schema::ListenerConfig;
pub use schema::StaticFilesConfig;
