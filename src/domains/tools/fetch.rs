//! The single outbound request every fetch tool makes.
//!
//! A tool turns its parameters into a [`FetchPlan`]. [`Fetcher`] runs the plan
//! with one HTTP request and pulls the result out of the response according to
//! the plan's [`Extraction`].

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::error::ToolError;
use crate::core::config::HttpConfig;

/// The request half of a plan.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchRequest {
    /// Plain GET.
    Get { url: String },

    /// POST with a JSON body.
    PostJson { url: String, body: Value },
}

impl FetchRequest {
    /// Target URL of the request.
    pub fn url(&self) -> &str {
        match self {
            Self::Get { url } | Self::PostJson { url, .. } => url,
        }
    }
}

/// How the tool result is taken from the response.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    /// The body as text, whatever the status.
    Body,

    /// The body as text when the status is 2xx; otherwise fail with
    /// `"<context>: <status text>"`.
    BodyIfSuccess { context: &'static str },

    /// One field of a JSON body. Absent or null fields resolve to
    /// [`ToolOutput::Absent`].
    JsonField(&'static str),
}

/// A fully-built upstream call.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchPlan {
    pub request: FetchRequest,
    pub extract: Extraction,
}

impl FetchPlan {
    /// GET `url` and return the body.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            request: FetchRequest::Get { url: url.into() },
            extract: Extraction::Body,
        }
    }

    /// POST `body` as JSON to `url` and return the body.
    pub fn post_json(url: impl Into<String>, body: Value) -> Self {
        Self {
            request: FetchRequest::PostJson {
                url: url.into(),
                body,
            },
            extract: Extraction::Body,
        }
    }

    /// Replace the extraction rule.
    pub fn extract(mut self, extract: Extraction) -> Self {
        self.extract = extract;
        self
    }
}

/// What a handler resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOutput {
    Text(String),

    /// The upstream answered without the expected field.
    Absent,
}

impl ToolOutput {
    /// Text of the output, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Absent => None,
        }
    }
}

/// Join a base URL and a path, ignoring a trailing slash on the base.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path)
}

/// Executes fetch plans on a shared HTTP client.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Build the shared client.
    pub fn new(config: &HttpConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(&config.user_agent).build()?;
        Ok(Self { client })
    }

    /// Run a plan: one request, then extraction.
    #[instrument(skip_all, fields(url = %plan.request.url()))]
    pub async fn run(&self, plan: FetchPlan) -> Result<ToolOutput, ToolError> {
        let url = plan.request.url().to_string();

        let request = match plan.request {
            FetchRequest::Get { url } => self.client.get(url),
            FetchRequest::PostJson { url, body } => self.client.post(url).json(&body),
        };

        let response = request.send().await.map_err(|e| {
            warn!("Request to {} failed: {}", url, e);
            ToolError::handler(format!("Request to {} failed: {}", url, e))
        })?;

        let status = response.status();
        debug!("Upstream responded with {}", status);

        match plan.extract {
            Extraction::Body => read_text(response).await.map(ToolOutput::Text),
            Extraction::BodyIfSuccess { context } => {
                if !status.is_success() {
                    // Unregistered codes have no reason phrase; report the bare code
                    let reason = status.canonical_reason().unwrap_or(status.as_str());
                    warn!("{}: {}", context, status);
                    return Err(ToolError::handler(format!("{}: {}", context, reason)));
                }
                read_text(response).await.map(ToolOutput::Text)
            }
            Extraction::JsonField(field) => {
                let value: Value = response.json().await.map_err(|e| {
                    ToolError::handler(format!("Failed to decode JSON response: {}", e))
                })?;
                Ok(json_field(&value, field))
            }
        }
    }
}

async fn read_text(response: reqwest::Response) -> Result<String, ToolError> {
    response
        .text()
        .await
        .map_err(|e| ToolError::handler(format!("Failed to read response body: {}", e)))
}

fn json_field(value: &Value, field: &str) -> ToolOutput {
    match value.get(field) {
        None | Some(Value::Null) => {
            warn!("Response has no '{}' field", field);
            ToolOutput::Absent
        }
        Some(Value::String(text)) => ToolOutput::Text(text.clone()),
        Some(other) => ToolOutput::Text(other.to_string()),
    }
}
