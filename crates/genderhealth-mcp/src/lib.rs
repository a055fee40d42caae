//! GenderHealth MCP Server Library
//!
//! This library contains the MCP protocol layer: the server handle and the
//! tool parameter types. The actual server binary is in main.rs.

pub mod protocol;
pub mod tools;

// Re-export commonly used types
pub use protocol::GenderHealthServer;
pub use tools::*;
