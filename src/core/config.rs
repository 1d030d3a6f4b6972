//! Configuration management for the MCP server.
//!
//! Centralized configuration populated from environment variables (with
//! `.env` support via dotenvy) or defaults.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::{Error, Result};
use super::transport::TransportConfig;

/// Default base URL of the Trello REST API.
pub const DEFAULT_TRELLO_BASE_URL: &str = "https://api.trello.com/1";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Trello API endpoint and credentials.
    pub trello: TrelloConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Trello API endpoint and credentials.
///
/// The secret fields never serialize and are redacted from `Debug` output,
/// so credentials cannot leak through either path.
#[derive(Clone, Serialize, Deserialize)]
pub struct TrelloConfig {
    /// Base URL of the Trello REST API.
    pub base_url: String,

    /// Trello API key (https://trello.com/power-ups/admin).
    #[serde(default, skip_serializing)]
    pub api_key: String,

    /// Trello API token authorized for the target workspace.
    #[serde(default, skip_serializing)]
    pub api_token: String,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for TrelloConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrelloConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("api_token", &"[REDACTED]")
            .finish()
    }
}

impl Default for TrelloConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_TRELLO_BASE_URL.to_string(),
            api_key: String::new(),
            api_token: String::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "trello-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            trello: TrelloConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Server/transport/logging variables are prefixed with `MCP_`
    /// (`MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_TRANSPORT`); Trello
    /// credentials come from `TRELLO_API_KEY` and `TRELLO_API_TOKEN`, which
    /// are required.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        if let Ok(base_url) = std::env::var("TRELLO_BASE_URL") {
            config.trello.base_url = base_url;
        }

        config.trello.api_key = require_env("TRELLO_API_KEY")?;
        config.trello.api_token = require_env("TRELLO_API_TOKEN")?;
        info!("Trello credentials loaded from environment");

        Ok(config)
    }
}

fn require_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::config(format!("{name} is not set"))),
    }
}
