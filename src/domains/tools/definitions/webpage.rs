//! Webpage-to-markdown tool.
//!
//! Reads a page through the Jina reader proxy, which renders it as markdown.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::config::EndpointsConfig;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::fetch::{FetchPlan, join_url};
use crate::domains::tools::handlers::FetchTool;

/// Parameters for the webpage tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WebpageMarkdownParams {
    /// The page to read. Passed to the proxy unmodified.
    pub url: String,
}

pub struct WebpageMarkdownTool;

impl FetchTool for WebpageMarkdownTool {
    type Params = WebpageMarkdownParams;

    const NAME: &'static str = "get_webpage_markdown";

    const DESCRIPTION: &'static str = "Fetch the content of a url using jina reader";

    fn plan(params: Self::Params, endpoints: &EndpointsConfig) -> Result<FetchPlan, ToolError> {
        Ok(FetchPlan::get(join_url(&endpoints.reader_base_url, &params.url)))
    }
}
