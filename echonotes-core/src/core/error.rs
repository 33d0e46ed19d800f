//! Error types for the Echo Notes core library.

use thiserror::Error;

/// All errors that can occur within the Echo Notes core library.
#[derive(Debug, Error)]
pub enum EchonotesError {
    /// Note content was empty or whitespace-only at creation time.
    #[error("Validation failed: note content cannot be empty")]
    EmptyContent,

    /// The backing key-value store rejected a read or write.
    #[error("Storage error: {0}")]
    Storage(String),

    /// An I/O operation on the filesystem failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be serialized or deserialized as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored or supplied theme value is not one of the known variants.
    #[error("Unknown theme value: {0}")]
    UnknownTheme(String),

    /// Speech capture was requested on a host without the capability.
    #[error("Speech capture is not available on this device")]
    SpeechUnavailable,
}

/// Convenience alias that pins the error type to [`EchonotesError`].
pub type Result<T> = std::result::Result<T, EchonotesError>;

impl EchonotesError {
    /// Returns a short, human-readable message suitable for display to the end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyContent => "Write something before saving the note".to_string(),
            Self::Storage(e) => format!("Failed to save: {e}"),
            Self::Io(e) => format!("File error: {e}"),
            Self::Json(e) => format!("Data format error: {e}"),
            Self::UnknownTheme(value) => format!("Unknown theme: {value}"),
            Self::SpeechUnavailable => {
                "Unfortunately your browser does not support audio recording".to_string()
            }
        }
    }
}
