//! End-to-end dispatch tests against a wiremock upstream.

use ireader_mcp_server::core::{Config, EndpointsConfig};
use ireader_mcp_server::domains::tools::{InvocationRequest, ToolError, ToolOutput, ToolRegistry};
use rmcp::model::{ErrorCode, JsonObject};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn registry_for(mock_server: &MockServer) -> ToolRegistry {
    let config = Config {
        endpoints: EndpointsConfig::all_at(mock_server.uri()),
        ..Config::default()
    };
    ToolRegistry::with_defaults(&config).unwrap()
}

fn request(tool: &str, arguments: serde_json::Value) -> InvocationRequest {
    let arguments: JsonObject = arguments.as_object().cloned().unwrap();
    InvocationRequest::new(tool, arguments)
}

/// Fails the test on drop if any request reaches the mock.
async fn forbid_requests(mock_server: &MockServer) {
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_webpage_markdown() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/https://example.com/article"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Title: Example\n\n# Article"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let registry = registry_for(&mock_server);
    let output = registry
        .invoke(request(
            "get_webpage_markdown",
            json!({ "url": "https://example.com/article" }),
        ))
        .await
        .unwrap();

    assert_eq!(output.as_text(), Some("Title: Example\n\n# Article"));
}

#[tokio::test]
async fn test_youtube_transcript() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/youtube-transcripts"))
        .and(body_json(json!({ "video_id": "dQw4w9WgXcQ", "format": true })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "transcript": "Never gonna give you up" })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let registry = registry_for(&mock_server);
    let output = registry
        .invoke(request(
            "get_youtube_transcript",
            json!({ "videoURL": "dQw4w9WgXcQ" }),
        ))
        .await
        .unwrap();

    assert_eq!(output.as_text(), Some("Never gonna give you up"));
}

#[tokio::test]
async fn test_youtube_transcript_missing_field_is_absent() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/youtube-transcripts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "error": "no captions" })))
        .mount(&mock_server)
        .await;

    let registry = registry_for(&mock_server);
    let output = registry
        .invoke(request(
            "get_youtube_transcript",
            json!({ "videoURL": "dQw4w9WgXcQ" }),
        ))
        .await
        .unwrap();

    assert_eq!(output, ToolOutput::Absent);
}

#[tokio::test]
async fn test_tweet_thread_uses_status_id() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/https://twitter-thread.com/t/42"))
        .respond_with(ResponseTemplate::new(200).set_body_string("thread text"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let registry = registry_for(&mock_server);
    let output = registry
        .invoke(request(
            "get_tweet_thread",
            json!({ "tweetURL": "https://x.com/user/status/42/photo" }),
        ))
        .await
        .unwrap();

    assert_eq!(output.as_text(), Some("thread text"));
}

#[tokio::test]
async fn test_pdf_text() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/pdf-to-text"))
        .and(body_json(json!({ "url": "https://example.com/paper.pdf" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "text": "Abstract" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let registry = registry_for(&mock_server);
    let output = registry
        .invoke(request(
            "get_pdf",
            json!({ "url": "https://example.com/paper.pdf" }),
        ))
        .await
        .unwrap();

    assert_eq!(output.as_text(), Some("Abstract"));
}

#[tokio::test]
async fn test_google_doc_export() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/document/d/1234567890abcdefg/export"))
        .and(query_param("format", "md"))
        .respond_with(ResponseTemplate::new(200).set_body_string("# Shared doc"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let registry = registry_for(&mock_server);
    let output = registry
        .invoke(request(
            "get_public_google_doc_markdown",
            json!({ "url": "https://docs.google.com/document/d/1234567890abcdefg/edit?usp=sharing" }),
        ))
        .await
        .unwrap();

    assert_eq!(output.as_text(), Some("# Shared doc"));
}

#[tokio::test]
async fn test_google_doc_export_error_status() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let registry = registry_for(&mock_server);
    let err = registry
        .invoke(request(
            "get_public_google_doc_markdown",
            json!({ "url": "https://docs.google.com/document/d/private/edit" }),
        ))
        .await
        .unwrap_err();

    assert!(matches!(err, ToolError::Handler(_)));
    assert_eq!(err.to_string(), "Failed to fetch document markdown: Unauthorized");
}

#[tokio::test]
async fn test_google_doc_invalid_url_makes_no_request() {
    let mock_server = MockServer::start().await;
    forbid_requests(&mock_server).await;

    let registry = registry_for(&mock_server);
    let err = registry
        .invoke(request(
            "get_public_google_doc_markdown",
            json!({ "url": "invalid-url" }),
        ))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Invalid Google Doc URL");
}

#[tokio::test]
async fn test_unknown_tool_makes_no_request() {
    let mock_server = MockServer::start().await;
    forbid_requests(&mock_server).await;

    let registry = registry_for(&mock_server);
    let err = registry
        .invoke(request("get_weather", json!({ "url": "https://example.com" })))
        .await
        .unwrap_err();

    assert!(matches!(err, ToolError::UnknownTool(_)));
}

#[tokio::test]
async fn test_missing_argument_makes_no_request() {
    let mock_server = MockServer::start().await;
    forbid_requests(&mock_server).await;

    let registry = registry_for(&mock_server);
    let err = registry
        .invoke(request("get_tweet_thread", json!({ "url": "https://x.com/a/status/1" })))
        .await
        .unwrap_err();

    assert!(matches!(err, ToolError::InvalidArguments(_)));
    assert!(err.to_string().contains("tweetURL"));
}

#[tokio::test]
async fn test_missing_argument_is_invalid_params() {
    let mock_server = MockServer::start().await;
    forbid_requests(&mock_server).await;

    let registry = registry_for(&mock_server);
    let err = registry
        .invoke(request("get_pdf", json!({})))
        .await
        .unwrap_err()
        .into_call_result()
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert_eq!(err.data, Some(json!({ "kind": "invalid_arguments" })));
}

#[tokio::test]
async fn test_concurrent_invocations() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/https://example.com/a"))
        .respond_with(ResponseTemplate::new(200).set_body_string("a"))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/https://example.com/b"))
        .respond_with(ResponseTemplate::new(200).set_body_string("b"))
        .mount(&mock_server)
        .await;

    let registry = registry_for(&mock_server);
    let (a, b) = tokio::join!(
        registry.invoke(request(
            "get_webpage_markdown",
            json!({ "url": "https://example.com/a" })
        )),
        registry.invoke(request(
            "get_webpage_markdown",
            json!({ "url": "https://example.com/b" })
        )),
    );

    assert_eq!(a.unwrap().as_text(), Some("a"));
    assert_eq!(b.unwrap().as_text(), Some("b"));
}
