//! MCP Tool Types
//!
//! Parameter types for the tools exposed by the server.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Name under which the greeting tool is registered.
pub const HELLO_TOOL: &str = "hello";

/// Parameters for hello
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HelloParams {
    /// Name of the user to greet
    pub name: String,
}
