//! Configuration file parsing for the server.
//!
//! Loads settings from TOML files including bind address, upload limit,
//! and where to find the provenance tool.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use veracity_probe::ToolConfig;

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Field present but unusable
    #[error("Invalid configuration field {0}: {1}")]
    InvalidField(String, String),
}

/// Server configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1")
    pub bind_address: String,

    /// Bind port (e.g., 8080)
    pub bind_port: u16,

    /// Largest accepted upload in bytes (default: 20 MiB)
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    /// Provenance tool lookup
    #[serde(default)]
    pub provenance_tool: ToolConfig,
}

/// Default upload limit: 20 MiB
fn default_max_upload_bytes() -> usize {
    20 * 1024 * 1024
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Create a default configuration for local use
    pub fn default_config() -> Self {
        ServerConfig {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 8080,
            max_upload_bytes: default_max_upload_bytes(),
            provenance_tool: ToolConfig::default(),
        }
    }

    /// Reject values that would make the server useless
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bind_address.trim().is_empty() {
            return Err(ConfigError::InvalidField(
                "bind_address".to_string(),
                "must not be empty".to_string(),
            ));
        }
        if self.max_upload_bytes == 0 {
            return Err(ConfigError::InvalidField(
                "max_upload_bytes".to_string(),
                "must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}
