//! Error types for Hap core operations.
//!
//! Storage errors never reach the user directly: the note store absorbs
//! them and logs a warning. They are still typed so backends and tests can
//! tell the failure modes apart.

use thiserror::Error;

/// Result type alias for Hap operations.
pub type Result<T> = std::result::Result<T, HapError>;

/// Core error type for Hap operations.
#[derive(Debug, Error)]
pub enum HapError {
    /// Reading or writing the notes file failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// The notes file exists but is not a valid note mapping
    #[error("Format error: {0}")]
    Format(String),
}

impl From<std::io::Error> for HapError {
    fn from(err: std::io::Error) -> Self {
        HapError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for HapError {
    fn from(err: serde_json::Error) -> Self {
        HapError::Format(err.to_string())
    }
}
