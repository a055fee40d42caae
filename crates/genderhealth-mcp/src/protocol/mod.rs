//! MCP Protocol Layer
//!
//! This module implements the Model Context Protocol server using rmcp 0.9.
//! It exposes the greeting as an MCP tool.

pub mod server;

pub use server::GenderHealthServer;
