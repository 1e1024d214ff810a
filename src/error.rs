//! Error types for getset
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using GetSetError
pub type Result<T> = std::result::Result<T, GetSetError>;

/// Unified error type for getset operations
#[derive(Debug, Error)]
pub enum GetSetError {
    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Input Source Errors
    // -------------------------------------------------------------------------
    #[error("Could not read from input source '{source_name}'.")]
    SourceUnreadable {
        source_name: String,
        #[source]
        cause: std::io::Error,
    },

    #[error("Input source '{source_name}' exceeds the {limit} byte limit")]
    InputTooLarge { source_name: String, limit: usize },

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GetSetError {
    /// The error raised when a collection has no storage backend.
    pub(crate) fn unbound() -> Self {
        GetSetError::Config("no storage backend configured".to_string())
    }
}
