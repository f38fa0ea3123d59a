//! Tool handlers module.
//!
//! [`ToolHandler`] is the object-safe seam the registry dispatches through.
//! Every tool in this crate is a [`FetchTool`]: a typed parameter struct plus a
//! function building the upstream request. [`FetchHandler`] adapts any
//! `FetchTool` to `ToolHandler`, so adding a tool never means writing another
//! handler.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use tracing::{info, instrument};

use super::error::ToolError;
use super::fetch::{FetchPlan, Fetcher, ToolOutput};
use crate::core::config::EndpointsConfig;

/// Trait implemented by everything the registry can invoke.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Check `arguments` against the tool's parameters. No I/O.
    fn validate(&self, arguments: &JsonObject) -> Result<(), ToolError>;

    /// Run the tool on arguments that passed [`validate`](Self::validate).
    async fn execute(&self, arguments: JsonObject) -> Result<ToolOutput, ToolError>;
}

/// Deserialize a raw argument object into a typed parameter struct.
pub fn parse_arguments<P: DeserializeOwned>(arguments: &JsonObject) -> Result<P, ToolError> {
    serde_json::from_value(serde_json::Value::Object(arguments.clone()))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// A tool that answers with a single upstream request.
pub trait FetchTool: Send + Sync + 'static {
    /// Parameters accepted by the tool; also the source of its input schema.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Build the upstream request. Must not perform I/O.
    fn plan(params: Self::Params, endpoints: &EndpointsConfig) -> Result<FetchPlan, ToolError>;

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<Self::Params>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

/// Runs a [`FetchTool`] against the shared [`Fetcher`].
pub struct FetchHandler<T> {
    fetcher: Arc<Fetcher>,
    endpoints: Arc<EndpointsConfig>,
    _tool: PhantomData<fn() -> T>,
}

impl<T: FetchTool> FetchHandler<T> {
    pub fn new(fetcher: Arc<Fetcher>, endpoints: Arc<EndpointsConfig>) -> Self {
        Self {
            fetcher,
            endpoints,
            _tool: PhantomData,
        }
    }
}

#[async_trait]
impl<T: FetchTool> ToolHandler for FetchHandler<T> {
    fn validate(&self, arguments: &JsonObject) -> Result<(), ToolError> {
        parse_arguments::<T::Params>(arguments).map(|_| ())
    }

    #[instrument(skip_all, fields(tool = T::NAME))]
    async fn execute(&self, arguments: JsonObject) -> Result<ToolOutput, ToolError> {
        let params = parse_arguments::<T::Params>(&arguments)?;
        let plan = T::plan(params, &self.endpoints)?;
        info!("Fetching {}", plan.request.url());
        self.fetcher.run(plan).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, JsonSchema)]
    struct UrlParams {
        url: String,
    }

    fn args(value: serde_json::Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_parse_arguments() {
        let params: UrlParams =
            parse_arguments(&args(serde_json::json!({ "url": "https://a.b" }))).unwrap();
        assert_eq!(params.url, "https://a.b");
    }

    #[test]
    fn test_parse_arguments_missing_field() {
        let err = parse_arguments::<UrlParams>(&JsonObject::new()).unwrap_err();
        assert_eq!(err.kind(), "invalid_arguments");
        assert!(err.to_string().contains("missing field `url`"));
    }

    #[test]
    fn test_parse_arguments_wrong_type() {
        let err = parse_arguments::<UrlParams>(&args(serde_json::json!({ "url": 5 })))
            .unwrap_err();
        assert_eq!(err.kind(), "invalid_arguments");
    }
}
