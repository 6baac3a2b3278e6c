//! Configuration loading from disk.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::EdgeConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "edge.toml";

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "EDGE_CONFIG";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<EdgeConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: EdgeConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load configuration from `path` if the file exists, otherwise use defaults.
///
/// Defaults are validated too, so a bad default never reaches startup.
pub fn load_or_default(path: &Path) -> Result<EdgeConfig, ConfigError> {
    if path.is_file() {
        return load_config(path);
    }
    let config = EdgeConfig::default();
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Config file path: `$EDGE_CONFIG` when set, else `edge.toml`.
pub fn config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}
