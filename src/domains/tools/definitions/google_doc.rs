//! Public Google Doc export tool.
//!
//! Only works for documents shared as "Anyone with the link can view";
//! private documents answer the export with a login redirect or an error
//! status.

use schemars::JsonSchema;
use serde::Deserialize;
use tracing::warn;

use crate::core::config::EndpointsConfig;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::fetch::{Extraction, FetchPlan, join_url};
use crate::domains::tools::handlers::FetchTool;
use crate::domains::tools::validation::extract_google_doc_id;

/// Parameters for the Google Doc tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GoogleDocMarkdownParams {
    #[schemars(description = "The public Google Doc URL")]
    pub url: String,
}

pub struct GoogleDocMarkdownTool;

impl FetchTool for GoogleDocMarkdownTool {
    type Params = GoogleDocMarkdownParams;

    const NAME: &'static str = "get_public_google_doc_markdown";

    const DESCRIPTION: &'static str = "Fetch the markdown content of a public Google Doc by URL";

    fn plan(params: Self::Params, endpoints: &EndpointsConfig) -> Result<FetchPlan, ToolError> {
        let Some(doc_id) = extract_google_doc_id(&params.url) else {
            warn!("Rejected non Google Doc URL: {}", params.url);
            return Err(ToolError::handler("Invalid Google Doc URL"));
        };

        let export_url = join_url(
            &endpoints.google_docs_base_url,
            &format!("document/d/{}/export?format=md", doc_id),
        );
        Ok(FetchPlan::get(export_url).extract(Extraction::BodyIfSuccess {
            context: "Failed to fetch document markdown",
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_builds_export_url() {
        let params = GoogleDocMarkdownParams {
            url: "https://docs.google.com/document/d/1234567890abcdefg/edit?usp=sharing"
                .to_string(),
        };
        let plan = GoogleDocMarkdownTool::plan(params, &EndpointsConfig::default()).unwrap();
        assert_eq!(
            plan.request.url(),
            "https://docs.google.com/document/d/1234567890abcdefg/export?format=md"
        );
        assert!(matches!(plan.extract, Extraction::BodyIfSuccess { .. }));
    }

    #[test]
    fn test_plan_rejects_invalid_url() {
        let params = GoogleDocMarkdownParams {
            url: "https://example.com/document/d/abc".to_string(),
        };
        let err = GoogleDocMarkdownTool::plan(params, &EndpointsConfig::default()).unwrap_err();
        assert_eq!(err.kind(), "handler_error");
        assert_eq!(err.to_string(), "Invalid Google Doc URL");
    }
}
