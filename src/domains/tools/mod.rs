//! Tools domain module.
//!
//! Tools are the operations MCP clients call. Every tool here validates its
//! arguments, makes one upstream HTTP request and returns text.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `handlers.rs` - `ToolHandler` seam and the generic `FetchHandler`
//! - `fetch.rs` - Request plans and the shared HTTP executor
//! - `registry.rs` - Central tool registry and dispatch
//! - `validation.rs` - URL parsing helpers
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define a params struct and implement `FetchTool`
//! 3. Export in `definitions/mod.rs`
//! 4. Register in `ToolRegistry::with_defaults`

pub mod definitions;
mod error;
pub mod fetch;
mod handlers;
mod registry;
pub mod validation;

pub use error::ToolError;
pub use fetch::{Extraction, FetchPlan, FetchRequest, Fetcher, ToolOutput};
pub use handlers::{FetchHandler, FetchTool, ToolHandler, parse_arguments};
pub use registry::{InvocationRequest, InvocationResult, ToolDefinition, ToolRegistry};
