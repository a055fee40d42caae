//! # genderhealth-mcp-core
//!
//! Core types for the GenderHealth MCP server.
//!
//! This crate has **no dependency** on the MCP SDK. It provides:
//!
//! - The server identity (the name the server answers to)
//! - The greeting produced by the `hello` tool
//! - Configuration loaded from YAML
//! - Error types
//!
//! The `genderhealth-mcp` crate binds these to the protocol layer.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod greeting;
pub mod identity;

// Re-export commonly used types
pub use config::{ServerConfig, ServerSettings, CONFIG_PATH_ENV};
pub use error::{Error, Result};
pub use greeting::greeting;
pub use identity::{ServerIdentity, DEFAULT_IDENTITY};
