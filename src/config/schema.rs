//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the edge
//! server. All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration for the edge server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct EdgeConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// The single backend API origin.
    pub backend: BackendConfig,

    /// Static asset root settings.
    pub static_files: StaticFilesConfig,

    /// Proxy request handling limits.
    pub proxy: ProxyConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:80").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:80".to_string(),
        }
    }
}

/// Backend origin configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Origin URL, scheme + host + port only (e.g., "http://localhost:3001").
    pub origin: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            origin: "http://localhost:3001".to_string(),
        }
    }
}

/// Static file root configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Build output directory, relative to the working directory.
    pub build_dir: PathBuf,

    /// Explicit root; skips build output detection when set.
    pub root: Option<PathBuf>,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            build_dir: PathBuf::from("frontend").join("dist"),
            root: None,
        }
    }
}

/// Proxy request handling limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProxyConfig {
    /// Maximum inbound request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 16 * 1024 * 1024, // 16MB
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_local_deployment() {
        let config = EdgeConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:80");
        assert_eq!(config.backend.origin, "http://localhost:3001");
        assert_eq!(config.static_files.build_dir, PathBuf::from("frontend/dist"));
        assert!(config.static_files.root.is_none());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: EdgeConfig = toml::from_str(
            r#"
            [listener]
            bind_address = "127.0.0.1:8080"
            "#,
        )
        .unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:8080");
        assert_eq!(config.backend.origin, "http://localhost:3001");
        assert_eq!(config.observability.log_level, "info");
    }
}
