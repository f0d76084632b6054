//! Error types for the Toolbench library.

use thiserror::Error;

/// Main error type for Toolbench operations.
#[derive(Debug, Error)]
pub enum ToolbenchError {
    /// Top-level array with no elements to infer a shape from.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Input of the wrong kind (e.g. a bare scalar where an object is expected).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Not enough parameters to complete a calculation.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The type worker is no longer accepting requests.
    #[error("Type worker has shut down")]
    WorkerClosed,
}

/// Result type alias for Toolbench operations.
pub type Result<T> = std::result::Result<T, ToolbenchError>;
