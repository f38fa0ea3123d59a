//! Transport configuration types.

use serde::{Deserialize, Serialize};

/// Transport configuration options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport (default for MCP).
    #[default]
    Stdio,
}

impl TransportConfig {
    /// Create a STDIO transport config.
    pub fn stdio() -> Self {
        Self::Stdio
    }

    /// Parse a transport name. An empty name means the default.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "" | "stdio" => Some(Self::Stdio),
            _ => None,
        }
    }

    /// Load transport config from environment variables.
    ///
    /// `MCP_TRANSPORT` may be unset or `stdio`; any other value falls back
    /// to stdio (see [`TransportConfig::unsupported_from_env`]).
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("MCP_TRANSPORT").unwrap_or_default()).unwrap_or_else(Self::stdio)
    }

    /// The `MCP_TRANSPORT` value, if it names a transport this server lacks.
    pub fn unsupported_from_env() -> Option<String> {
        std::env::var("MCP_TRANSPORT")
            .ok()
            .filter(|name| Self::parse(name).is_none())
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
        }
    }
}
