//! Error types for the GenderHealth MCP server.

use thiserror::Error;

/// Main error type for GenderHealth MCP operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A tool with this name is already registered on the server
    #[error("Tool already registered: {0}")]
    DuplicateTool(String),

    /// Server identity is empty or otherwise unusable
    #[error("Invalid server identity: {0:?}")]
    InvalidIdentity(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed YAML configuration
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
