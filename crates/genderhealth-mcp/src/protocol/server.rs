//! GenderHealth MCP Server Implementation
//!
//! Owns the server identity and the tool registration table, and routes MCP
//! tool calls through rmcp's `ToolRouter`. Tools are registered explicitly so
//! that a second registration under the same name is rejected instead of
//! silently replacing the first.

use rmcp::{
    handler::server::{
        router::tool::{ToolRoute, ToolRouter},
        wrapper::Parameters,
    },
    model::*,
    tool, tool_handler, ErrorData as McpError,
};

use tracing::{debug, info, instrument, warn};

use genderhealth_mcp_core::{greeting, Error, ServerConfig, ServerIdentity};

use crate::tools::*;

const DEFAULT_INSTRUCTIONS: &str = "GenderHealth MCP Server. \
     Call the hello tool with a name to receive a greeting from GenderHealth.";

/// GenderHealth MCP Server
///
/// A named server handle with its own tool registration table.
#[derive(Clone)]
pub struct GenderHealthServer {
    /// Name reported to clients during initialization
    identity: ServerIdentity,
    /// Instructions reported to clients during initialization
    instructions: String,
    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl GenderHealthServer {
    /// Create a server with no tools registered.
    pub fn new(identity: ServerIdentity) -> Self {
        Self {
            identity,
            instructions: DEFAULT_INSTRUCTIONS.to_string(),
            tool_router: ToolRouter::new(),
        }
    }

    /// Create a server from configuration with the default tools registered.
    pub fn from_config(config: &ServerConfig) -> genderhealth_mcp_core::Result<Self> {
        let mut server = Self::new(config.server.name.clone());
        if let Some(instructions) = &config.server.instructions {
            server.instructions = instructions.clone();
        }
        server.with_default_tools()
    }

    /// Register the default tool set (`hello`).
    pub fn with_default_tools(mut self) -> genderhealth_mcp_core::Result<Self> {
        self.register(Self::hello_route())?;
        Ok(self)
    }

    /// Register a tool.
    ///
    /// Fails with [`Error::DuplicateTool`] if a tool with the same name is
    /// already registered; the existing registration is kept.
    pub fn register(&mut self, route: ToolRoute<Self>) -> genderhealth_mcp_core::Result<()> {
        let name = route.attr.name.to_string();
        if self.tool_router.has_route(&name) {
            warn!("Rejecting duplicate tool registration: {}", name);
            return Err(Error::DuplicateTool(name));
        }

        debug!("Registering tool: {}", name);
        self.tool_router.add_route(route);
        Ok(())
    }

    /// Route for the `hello` tool.
    pub fn hello_route() -> ToolRoute<Self> {
        ToolRoute::new(Self::hello_tool_attr(), Self::hello)
    }

    /// Server identity.
    pub fn identity(&self) -> &ServerIdentity {
        &self.identity
    }

    /// Names of the registered tools, sorted.
    pub fn tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.into_owned())
            .collect();
        names.sort();
        names
    }

    /// Greet a user by name
    #[tool(description = "Chào user bằng tên.")]
    #[instrument(skip_all)]
    async fn hello(
        &self,
        Parameters(params): Parameters<HelloParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Greeting user: {} chars", params.name.chars().count());

        let message = greeting(&params.name);

        info!("Tool '{}' answered", HELLO_TOOL);

        Ok(CallToolResult::success(vec![Content::text(message)]))
    }
}

impl Default for GenderHealthServer {
    fn default() -> Self {
        Self::new(ServerIdentity::default())
    }
}

// Implement the ServerHandler trait to define server capabilities
#[tool_handler]
impl rmcp::ServerHandler for GenderHealthServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.identity.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(self.instructions.clone()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
