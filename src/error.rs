//! Error types for Todor
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in Todor
#[derive(Debug, Error)]
pub enum TodorError {
    /// IO error while reading or writing the todo file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error, including records
    /// missing a required field
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Todor operations
pub type Result<T> = std::result::Result<T, TodorError>;
