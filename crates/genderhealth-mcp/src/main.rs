//! # GenderHealth MCP Server
//!
//! Model Context Protocol server for the GenderHealth application.
//!
//! ## Overview
//!
//! The server registers a single tool, `hello`, which greets a user by name,
//! and serves it over stdio. Logs go to stderr since stdout carries the
//! protocol.
//!
//! ## Configuration
//!
//! - `GENDERHEALTH_MCP_CONFIG`: optional path to a YAML config file
//! - `RUST_LOG`: log filter, overrides `server.log_level`

use rmcp::{transport::stdio, ServiceExt};
use tracing_subscriber::EnvFilter;

use genderhealth_mcp::GenderHealthServer;
use genderhealth_mcp_core::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!(
        "GenderHealth MCP Server v{} starting as '{}'...",
        env!("CARGO_PKG_VERSION"),
        config.server.name
    );

    let server = GenderHealthServer::from_config(&config)?;

    tracing::info!(
        "Registered tools: {:?}, starting stdio transport...",
        server.tool_names()
    );

    // Serve the MCP server over stdio
    let service = server.serve(stdio()).await.map_err(|e| {
        tracing::error!("Error starting server: {}", e);
        e
    })?;

    // Wait for the client to close the stream
    let quit_reason = service.waiting().await?;

    tracing::info!(?quit_reason, "GenderHealth MCP Server shutting down");

    Ok(())
}
