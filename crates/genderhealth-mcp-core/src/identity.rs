//! Server identity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Name the server reports when no configuration overrides it.
pub const DEFAULT_IDENTITY: &str = "genderhealth";

/// Immutable name of a running server instance.
///
/// Sent to clients as `serverInfo.name` during the MCP handshake.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ServerIdentity(String);

impl ServerIdentity {
    /// Create an identity, rejecting empty or whitespace-only names.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::InvalidIdentity(name));
        }
        Ok(Self(name))
    }

    /// Get the identity as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ServerIdentity {
    fn default() -> Self {
        Self(DEFAULT_IDENTITY.to_string())
    }
}

impl TryFrom<String> for ServerIdentity {
    type Error = Error;

    fn try_from(name: String) -> Result<Self> {
        Self::new(name)
    }
}

impl From<ServerIdentity> for String {
    fn from(identity: ServerIdentity) -> Self {
        identity.0
    }
}

impl fmt::Display for ServerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
