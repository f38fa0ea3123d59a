//! Tool-specific error types.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use thiserror::Error;

/// Errors that can occur while registering or invoking tools.
#[derive(Debug, Error)]
pub enum ToolError {
    /// A tool with the same name is already registered.
    #[error("Tool already registered: {0}")]
    DuplicateName(String),

    /// The requested tool was not found.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The arguments do not match the tool's parameters.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The handler ran and failed.
    #[error("{0}")]
    Handler(String),
}

impl ToolError {
    /// Create a new "duplicate name" error.
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName(name.into())
    }

    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new handler error.
    pub fn handler(msg: impl Into<String>) -> Self {
        Self::Handler(msg.into())
    }

    /// Stable tag for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DuplicateName(_) => "duplicate_name",
            Self::UnknownTool(_) => "unknown_tool",
            Self::InvalidArguments(_) => "invalid_arguments",
            Self::Handler(_) => "handler_error",
        }
    }

    /// Convert into the MCP `tools/call` response.
    ///
    /// Dispatch failures become protocol errors; handler failures are tool
    /// results flagged with `is_error` so the calling agent can read them.
    pub fn into_call_result(self) -> Result<CallToolResult, McpError> {
        let data = Some(serde_json::json!({ "kind": self.kind() }));
        match self {
            Self::Handler(msg) => Ok(CallToolResult::error(vec![Content::text(msg)])),
            Self::DuplicateName(_) => Err(McpError::internal_error(self.to_string(), data)),
            Self::UnknownTool(_) | Self::InvalidArguments(_) => {
                Err(McpError::invalid_params(self.to_string(), data))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::{ErrorCode, RawContent};

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ToolError::unknown_tool("nope").to_string(),
            "Unknown tool: nope"
        );
        assert_eq!(
            ToolError::invalid_arguments("missing field `url`").to_string(),
            "Invalid arguments: missing field `url`"
        );
        assert_eq!(
            ToolError::handler("Invalid Google Doc URL").to_string(),
            "Invalid Google Doc URL"
        );
    }

    #[test]
    fn test_kinds() {
        assert_eq!(ToolError::duplicate_name("a").kind(), "duplicate_name");
        assert_eq!(ToolError::unknown_tool("a").kind(), "unknown_tool");
        assert_eq!(ToolError::invalid_arguments("a").kind(), "invalid_arguments");
        assert_eq!(ToolError::handler("a").kind(), "handler_error");
    }

    #[test]
    fn test_handler_error_is_tool_result() {
        let result = ToolError::handler("boom").into_call_result().unwrap();
        assert_eq!(result.is_error, Some(true));
        match &result.content[0].raw {
            RawContent::Text(text) => assert_eq!(text.text, "boom"),
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_unknown_tool_is_protocol_error() {
        let err = ToolError::unknown_tool("nope").into_call_result().unwrap_err();
        assert_eq!(err.message, "Unknown tool: nope");
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(err.data, Some(serde_json::json!({ "kind": "unknown_tool" })));
    }

    #[test]
    fn test_invalid_arguments_is_invalid_params() {
        let err = ToolError::invalid_arguments("missing field `url`")
            .into_call_result()
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("missing field `url`"));
        assert_eq!(
            err.data,
            Some(serde_json::json!({ "kind": "invalid_arguments" }))
        );
    }
}
