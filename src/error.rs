//! Error types for forge
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in forge
#[derive(Debug, Error)]
pub enum ForgeError {
    /// Toolkit installation root could not be resolved
    #[error("Toolkit error: {0}")]
    Toolkit(String),

    /// An external tool failed to launch or exited non-zero
    #[error("Tool '{name}' failed: {detail}")]
    Tool { name: String, detail: String },

    /// One or more check tasks failed in a batch
    #[error("{0} check(s) failed")]
    ChecksFailed(usize),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for forge operations
pub type Result<T> = std::result::Result<T, ForgeError>;
