//! Resource-specific error types.

use thiserror::Error;

/// Errors that can occur during resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The requested resource was not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// A resource with the same URI is already registered.
    #[error("Resource already registered: {0}")]
    Duplicate(String),
}

impl ResourceError {
    /// Create a new "not found" error.
    pub fn not_found(uri: impl Into<String>) -> Self {
        Self::NotFound(uri.into())
    }

    /// Create a new "duplicate" error.
    pub fn duplicate(uri: impl Into<String>) -> Self {
        Self::Duplicate(uri.into())
    }
}
