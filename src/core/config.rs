//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Outbound HTTP client configuration.
    pub http: HttpConfig,

    /// Base URLs of the upstream services the tools call.
    pub endpoints: EndpointsConfig,
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

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Configuration for the shared outbound HTTP client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header sent with every upstream request.
    pub user_agent: String,
}

/// Upstream service locations.
///
/// Base URLs are stored as given; a trailing slash is ignored when request
/// URLs are built from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointsConfig {
    /// Jina reader proxy, prepended to the page URL.
    pub reader_base_url: String,

    /// Kome tools API hosting the transcript and PDF endpoints.
    pub kome_base_url: String,

    /// Thread-rendering mirror, addressed by tweet id and read through the reader proxy.
    pub thread_mirror_url: String,

    /// Google Docs host used for markdown export.
    pub google_docs_base_url: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("ireader-mcp/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            reader_base_url: "https://r.jina.ai".to_string(),
            kome_base_url: "https://api.kome.ai/api/tools".to_string(),
            thread_mirror_url: "https://twitter-thread.com/t".to_string(),
            google_docs_base_url: "https://docs.google.com".to_string(),
        }
    }
}

impl EndpointsConfig {
    /// Point every upstream at a single base URL.
    ///
    /// The thread mirror keeps its default so that thread requests still go
    /// through the reader proxy.
    pub fn all_at(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            reader_base_url: base_url.clone(),
            kome_base_url: base_url.clone(),
            google_docs_base_url: base_url,
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "ireader".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            http: HttpConfig::default(),
            endpoints: EndpointsConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = timestamps.parse().unwrap_or(true);
        }

        if let Ok(user_agent) = std::env::var("MCP_USER_AGENT") {
            config.http.user_agent = user_agent;
        }

        // Upstream overrides, mostly useful for pointing at a local mock
        let overrides = [
            ("MCP_READER_BASE_URL", &mut config.endpoints.reader_base_url),
            ("MCP_KOME_BASE_URL", &mut config.endpoints.kome_base_url),
            ("MCP_THREAD_MIRROR_URL", &mut config.endpoints.thread_mirror_url),
            (
                "MCP_GOOGLE_DOCS_BASE_URL",
                &mut config.endpoints.google_docs_base_url,
            ),
        ];
        for (var, field) in overrides {
            if let Ok(value) = std::env::var(var) {
                *field = value;
            }
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config
    }

    /// Endpoints that differ from their defaults, as `(variable, value)`.
    pub fn overridden_endpoints(&self) -> Vec<(&'static str, &str)> {
        let defaults = EndpointsConfig::default();
        let endpoints = &self.endpoints;
        [
            (
                "MCP_READER_BASE_URL",
                &endpoints.reader_base_url,
                defaults.reader_base_url,
            ),
            (
                "MCP_KOME_BASE_URL",
                &endpoints.kome_base_url,
                defaults.kome_base_url,
            ),
            (
                "MCP_THREAD_MIRROR_URL",
                &endpoints.thread_mirror_url,
                defaults.thread_mirror_url,
            ),
            (
                "MCP_GOOGLE_DOCS_BASE_URL",
                &endpoints.google_docs_base_url,
                defaults.google_docs_base_url,
            ),
        ]
        .into_iter()
        .filter(|(_, value, default)| *value != default)
        .map(|(var, value, _)| (var, value.as_str()))
        .collect()
    }

    /// Report environment overrides. Call once logging is initialized.
    pub fn log_overrides(&self) {
        for (var, value) in self.overridden_endpoints() {
            info!("{} overridden: {}", var, value);
        }
        if let Some(transport) = TransportConfig::unsupported_from_env() {
            warn!(
                "Unsupported MCP_TRANSPORT '{}', falling back to {}",
                transport,
                self.transport.description()
            );
        }
    }
}
