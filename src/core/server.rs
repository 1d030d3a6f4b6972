//! MCP Server implementation and lifecycle management.
//!
//! The main server handler wires the Trello card service into the tool
//! router and implements the MCP protocol. Tools are defined in
//! `domains/tools/definitions/` with one file per tool; adding a tool does
//! not require modifying this file.

use std::sync::Arc;

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};

use super::config::Config;
use crate::domains::tools::build_tool_router;
use crate::domains::trello::{CardService, TrelloHttpClient};

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Builds one shared [`CardService`] over an authenticated HTTP client
    /// and hands it to every tool route.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let client = Arc::new(TrelloHttpClient::new(&config.trello));
        let service = Arc::new(CardService::new(client));

        Self {
            tool_router: build_tool_router::<Self>(service),
            config,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Trello MCP server. Provides tools to read, create, update and delete \
                 Trello cards and their comments."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_reports_configured_identity() {
        let server = McpServer::new(Config::default());
        assert_eq!(server.name(), "trello-mcp-server");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn server_advertises_tool_capability() {
        let server = McpServer::new(Config::default());
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
    }
}
