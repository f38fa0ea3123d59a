//! YouTube transcript tool, backed by the kome.ai transcript API.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::core::config::EndpointsConfig;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::fetch::{Extraction, FetchPlan, join_url};
use crate::domains::tools::handlers::FetchTool;

/// Parameters for the transcript tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct YoutubeTranscriptParams {
    #[serde(rename = "videoURL")]
    #[schemars(description = "The YouTube video ID or URL")]
    pub video_url: String,
}

pub struct YoutubeTranscriptTool;

impl FetchTool for YoutubeTranscriptTool {
    type Params = YoutubeTranscriptParams;

    const NAME: &'static str = "get_youtube_transcript";

    const DESCRIPTION: &'static str = "Fetch the transcript of a YouTube video";

    // A response without `transcript` resolves to an empty result, not an error.
    fn plan(params: Self::Params, endpoints: &EndpointsConfig) -> Result<FetchPlan, ToolError> {
        let url = join_url(&endpoints.kome_base_url, "youtube-transcripts");
        let body = json!({ "video_id": params.video_url, "format": true });
        Ok(FetchPlan::post_json(url, body).extract(Extraction::JsonField("transcript")))
    }
}
