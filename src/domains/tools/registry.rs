//! Tool Registry - central registration and dispatch for all tools.
//!
//! The registry is built once at startup and only read afterwards, so it is
//! shared behind an `Arc` without locking.

use std::collections::BTreeMap;
use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use tracing::{info, instrument, warn};

use super::definitions::{
    GoogleDocMarkdownTool, PdfTool, TweetThreadTool, WebpageMarkdownTool, YoutubeTranscriptTool,
};
use super::error::ToolError;
use super::fetch::{Fetcher, ToolOutput};
use super::handlers::{FetchHandler, FetchTool, ToolHandler};
use crate::core::config::{Config, EndpointsConfig};

/// A registered tool: its MCP metadata and the handler behind it.
#[derive(Clone)]
pub struct ToolDefinition {
    pub tool: Tool,
    pub handler: Arc<dyn ToolHandler>,
}

impl ToolDefinition {
    pub fn new(tool: Tool, handler: Arc<dyn ToolHandler>) -> Self {
        Self { tool, handler }
    }

    /// Definition for a [`FetchTool`] running on the shared fetcher.
    pub fn fetch<T: FetchTool>(fetcher: Arc<Fetcher>, endpoints: Arc<EndpointsConfig>) -> Self {
        Self::new(
            T::to_tool(),
            Arc::new(FetchHandler::<T>::new(fetcher, endpoints)),
        )
    }

    pub fn name(&self) -> &str {
        &self.tool.name
    }
}

/// One call to one tool.
#[derive(Debug, Clone)]
pub struct InvocationRequest {
    pub tool_name: String,
    pub arguments: JsonObject,
}

impl InvocationRequest {
    pub fn new(tool_name: impl Into<String>, arguments: JsonObject) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments,
        }
    }
}

/// Outcome of [`ToolRegistry::invoke`].
pub type InvocationResult = Result<ToolOutput, ToolError>;

/// Tool registry - owns every tool and mediates every invocation.
#[derive(Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, ToolDefinition>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding all tools of this server.
    pub fn with_defaults(config: &Config) -> crate::core::Result<Self> {
        let fetcher = Arc::new(Fetcher::new(&config.http)?);
        let endpoints = Arc::new(config.endpoints.clone());

        let mut registry = Self::new();
        registry.register(ToolDefinition::fetch::<WebpageMarkdownTool>(
            fetcher.clone(),
            endpoints.clone(),
        ))?;
        registry.register(ToolDefinition::fetch::<YoutubeTranscriptTool>(
            fetcher.clone(),
            endpoints.clone(),
        ))?;
        registry.register(ToolDefinition::fetch::<TweetThreadTool>(
            fetcher.clone(),
            endpoints.clone(),
        ))?;
        registry.register(ToolDefinition::fetch::<PdfTool>(
            fetcher.clone(),
            endpoints.clone(),
        ))?;
        registry.register(ToolDefinition::fetch::<GoogleDocMarkdownTool>(
            fetcher, endpoints,
        ))?;

        Ok(registry)
    }

    /// Add a tool. Names must be unique.
    pub fn register(&mut self, definition: ToolDefinition) -> Result<(), ToolError> {
        let name = definition.name().to_string();
        if self.tools.contains_key(&name) {
            return Err(ToolError::duplicate_name(name));
        }
        info!("Registering tool: {}", name);
        self.tools.insert(name, definition);
        Ok(())
    }

    /// Get all tool names, sorted.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    /// Get all tools as Tool models (metadata), sorted by name.
    pub fn tools(&self) -> Vec<Tool> {
        self.tools.values().map(|d| d.tool.clone()).collect()
    }

    /// Dispatch one invocation.
    ///
    /// Unknown names and invalid arguments fail before the handler runs.
    #[instrument(skip_all, fields(tool = %request.tool_name))]
    pub async fn invoke(&self, request: InvocationRequest) -> InvocationResult {
        let Some(definition) = self.tools.get(&request.tool_name) else {
            warn!("Unknown tool requested: {}", request.tool_name);
            return Err(ToolError::unknown_tool(request.tool_name));
        };

        if let Err(e) = definition.handler.validate(&request.arguments) {
            warn!("Rejected arguments: {}", e);
            return Err(e);
        }

        info!("Invoking tool");
        definition.handler.execute(request.arguments).await
    }
}
