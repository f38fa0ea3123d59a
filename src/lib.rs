//! ireader MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that turns URLs
//! into text: webpages as markdown, YouTube transcripts, tweet threads, PDF
//! text and public Google Docs.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: the fetch tools, their registry and the URL validators
//!   - **resources**: Data resources that can be read by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use ireader_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> ireader_mcp_server::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
