//! Error types for track-core

/// Error returned by a caller-supplied trigger function.
pub type TriggerError = Box<dyn std::error::Error + Send + Sync>;

/// Result type for track-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in track-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `trigger` was called without an event name
    #[error("event is a required parameter")]
    MissingEvent,

    /// The downstream trigger function failed; its error is passed through untouched
    #[error(transparent)]
    Trigger(TriggerError),

    // Transparent wrappers used by config loading
    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON deserialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
}

impl Error {
    /// Returns the downstream trigger error, if this is one.
    pub fn downstream(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Error::Trigger(source) => Some(source.as_ref()),
            _ => None,
        }
    }
}
