use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for documentation rendering operations.
pub type Result<T> = std::result::Result<T, DocsError>;

/// Error variants for record emission and output writing.
///
/// Missing documentation is never an error: extraction absorbs it into empty
/// strings and maps. Only the output side and the input loader can fail.
#[derive(Debug, Error)]
pub enum DocsError {
    /// Writing an output document failed.
    #[error("failed to write '{path}': {error}")]
    Io {
        /// Destination that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        error: std::io::Error,
    },

    /// The logical output path would escape the output root.
    #[error("invalid output path '{path}': {reason}")]
    InvalidOutputPath {
        /// Logical path handed to the writer.
        path: String,
        /// Why the path was rejected.
        reason: String,
    },

    /// Serializing a record to JSON failed.
    #[error("failed to serialize record for '{path}': {error}")]
    Serialize {
        /// Output path of the record.
        path: String,
        /// Underlying serde error.
        #[source]
        error: serde_json::Error,
    },

    /// The documentation tree could not be decoded.
    #[error("invalid documentation tree: {0}")]
    Input(#[from] serde_json::Error),

    /// A render task panicked or was cancelled.
    #[error("render task for '{path}' failed: {message}")]
    TaskFailed {
        /// Output path the task was emitting.
        path: String,
        /// Join error message.
        message: String,
    },

    /// Generic error variant.
    #[error("{message}")]
    Other {
        /// Human-readable error message.
        message: String,
    },
}

impl DocsError {
    /// Helper to build an [`DocsError::InvalidOutputPath`].
    pub fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOutputPath {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
