use std::io;

/// Errors that can occur during test-scope operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Resolution cancelled")]
    Cancelled,

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Tree-sitter error: {0}")]
    TreeSitterError(String),

    #[error("Manifest error: {0}")]
    ManifestError(String),

    #[error("Background task error: {0}")]
    TaskError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error is the cooperative-cancellation path rather than a
    /// genuine failure.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }
}

/// Result type alias for test-scope operations
pub type Result<T> = std::result::Result<T, Error>;
