//! Error types for track-harness

/// Result type for harness operations
pub type Result<T> = std::result::Result<T, HarnessError>;

/// Errors that can occur in harness operations
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// Error from track-core
    #[error(transparent)]
    Core(#[from] track_core::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl HarnessError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
