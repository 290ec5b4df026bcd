//! Error types for the render crate.

use thiserror::Error;

/// Errors that can occur while rendering a comparison.
#[derive(Debug, Error)]
pub enum RenderError {
    /// JSON encoding failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias for render results.
pub type RenderResult<T> = Result<T, RenderError>;
