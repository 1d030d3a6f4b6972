//! Trello MCP Server Library
//!
//! A Model Context Protocol (MCP) server exposing Trello boards, lists,
//! cards and comments as callable tools.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the main server handler and
//!   the transport layer (STDIO by default, TCP behind a feature flag)
//! - **domains**: Business logic organized by bounded contexts
//!   - **trello**: Typed entities, the authenticated API client and the
//!     card service (including the concurrent comment fan-out)
//!   - **tools**: The MCP tools wrapping the card service
//!
//! # Example
//!
//! ```rust,no_run
//! use trello_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
