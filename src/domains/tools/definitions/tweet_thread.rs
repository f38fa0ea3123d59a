//! Tweet thread tool.
//!
//! The thread is rendered by a thread-unrolling mirror and read through the
//! Jina reader proxy.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::config::EndpointsConfig;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::fetch::{FetchPlan, join_url};
use crate::domains::tools::handlers::FetchTool;
use crate::domains::tools::validation::extract_tweet_id;

/// Parameters for the tweet thread tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TweetThreadParams {
    #[serde(rename = "tweetURL")]
    #[schemars(description = "The tweet ID or URL")]
    pub tweet_url: String,
}

pub struct TweetThreadTool;

impl FetchTool for TweetThreadTool {
    type Params = TweetThreadParams;

    const NAME: &'static str = "get_tweet_thread";

    const DESCRIPTION: &'static str = "Fetch the thread of a tweet";

    fn plan(params: Self::Params, endpoints: &EndpointsConfig) -> Result<FetchPlan, ToolError> {
        let tweet_id = extract_tweet_id(&params.tweet_url);
        let mirror = join_url(&endpoints.thread_mirror_url, tweet_id);
        Ok(FetchPlan::get(join_url(&endpoints.reader_base_url, &mirror)))
    }
}
