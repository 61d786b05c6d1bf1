//! CLI configuration loaded from a TOML file
//!
//! Every key has a default, so a missing file or an empty file is valid.
//!
//! ```toml
//! log_level = "debug"
//! pretty = false
//! default_asset = "EUR"
//! ```

use ledgerkit_core::validate_asset_code;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Log levels accepted in `log_level`
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File not found
    #[error("config file not found: {0}")]
    NotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Validation error
    #[error("validation error: {0}")]
    Validation(String),
}

/// Root configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Default log filter when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Pretty-print JSON output
    #[serde(default = "default_true")]
    pub pretty: bool,

    /// Asset used by `template` when `--asset` is omitted
    #[serde(default = "default_asset")]
    pub default_asset: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_asset() -> String {
    "USD".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            pretty: default_true(),
            default_asset: default_asset(),
        }
    }
}

impl CliConfig {
    /// Load configuration from file
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load configuration from string
    pub fn load_str(content: &str) -> Result<Self, ConfigError> {
        let config: CliConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "unknown log_level '{}' (expected one of {})",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        validate_asset_code(&self.default_asset)
            .map_err(|e| ConfigError::Validation(format!("default_asset: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::load_str("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.log_level, "info");
        assert!(config.pretty);
        assert_eq!(config.default_asset, "USD");
    }

    #[test]
    fn test_load_string() {
        let config_str = r#"
log_level = "debug"
pretty = false
default_asset = "BTC"
"#;

        let config = CliConfig::load_str(config_str).unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(!config.pretty);
        assert_eq!(config.default_asset, "BTC");
    }

    #[test]
    fn test_validation_log_level() {
        let result = CliConfig::load_str("log_level = \"loud\"");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_validation_default_asset() {
        let result = CliConfig::load_str("default_asset = \"us dollar\"");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_parse_error() {
        let result = CliConfig::load_str("pretty = \"maybe\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = CliConfig::load_file("/definitely/not/here.toml");
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
        assert_eq!(CliConfig::load_or_default(None).unwrap(), CliConfig::default());
    }
}
