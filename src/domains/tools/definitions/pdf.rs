//! PDF text extraction tool, backed by the kome.ai pdf-to-text API.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::core::config::EndpointsConfig;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::fetch::{Extraction, FetchPlan, join_url};
use crate::domains::tools::handlers::FetchTool;

/// Parameters for the PDF tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PdfParams {
    #[schemars(description = "The URL of the PDF file to extract text from")]
    pub url: String,
}

pub struct PdfTool;

impl FetchTool for PdfTool {
    type Params = PdfParams;

    const NAME: &'static str = "get_pdf";

    const DESCRIPTION: &'static str = "Extract text content from a PDF file";

    fn plan(params: Self::Params, endpoints: &EndpointsConfig) -> Result<FetchPlan, ToolError> {
        let url = join_url(&endpoints.kome_base_url, "pdf-to-text");
        Ok(FetchPlan::post_json(url, json!({ "url": params.url }))
            .extract(Extraction::JsonField("text")))
    }
}
