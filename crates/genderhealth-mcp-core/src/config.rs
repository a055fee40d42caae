//! Configuration types for the GenderHealth MCP server.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{Error, ServerIdentity};

/// Environment variable naming an optional YAML configuration file.
pub const CONFIG_PATH_ENV: &str = "GENDERHEALTH_MCP_CONFIG";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Server configuration loaded from YAML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Server settings
    pub server: ServerSettings,
}

impl ServerConfig {
    /// Load configuration from the file named by [`CONFIG_PATH_ENV`].
    ///
    /// Returns the defaults when the variable is unset.
    pub fn load() -> crate::Result<Self> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    pub fn from_yaml(yaml: &str) -> crate::Result<Self> {
        let config: ServerConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> crate::Result<()> {
        // The identity type rejects blank names on its own; re-check for
        // configs built in code.
        ServerIdentity::new(self.server.name.as_str())?;

        if self.server.transport != "stdio" {
            return Err(Error::Config(format!(
                "server.transport must be \"stdio\", got {:?}",
                self.server.transport
            )));
        }

        if !LOG_LEVELS.contains(&self.server.log_level.as_str()) {
            return Err(Error::Config(format!(
                "server.log_level must be one of {}, got {:?}",
                LOG_LEVELS.join("/"),
                self.server.log_level
            )));
        }

        Ok(())
    }
}

/// Server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Name reported to clients
    pub name: ServerIdentity,
    /// Transport type (only stdio)
    pub transport: String,
    /// Log level used when RUST_LOG is unset (trace, debug, info, warn, error)
    pub log_level: String,
    /// Instructions sent to clients in the initialize response
    pub instructions: Option<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            name: ServerIdentity::default(),
            transport: "stdio".to_string(),
            log_level: "info".to_string(),
            instructions: None,
        }
    }
}
