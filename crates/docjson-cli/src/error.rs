//! Error handling for the docjson CLI.
//!
//! `CliError` is the top-level error every command returns. Domain errors
//! convert into it via `#[from]`, and `main` turns it into a miette report.
//!
//! # Example
//!
//! ```rust,no_run
//! use docjson_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_tree(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path).with_path(path)
//! }
//! ```

mod diagnostic;

use std::path::PathBuf;

use docjson::DocsError;
use thiserror::Error;

pub use diagnostic::{cli_error_to_miette, docs_error_to_miette};

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (file not found, invalid values, etc.)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors from the render library
    #[error("{0}")]
    Docs(#[from] DocsError),

    /// Some declarations could not be rendered
    #[error("{failed} of {total} declarations failed to render\n\nHint: Re-run with --verbose to see each failure")]
    RenderFailed {
        /// Number of failed declarations
        failed: usize,
        /// Number of declarations attempted
        total: usize,
    },

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file doesn't exist at the given location
    #[error("Config file not found: {}\n\nHint: Create a docjson.config.json file or specify --config <path>", .0.display())]
    NotFound(PathBuf),

    /// Missing required configuration field
    #[error("Missing required field: {field}\n\nHint: {hint}")]
    MissingField {
        /// Name of the missing field
        field: String,
        /// Helpful hint for providing the field
        hint: String,
    },

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turns a not-found I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Prefixes the error message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            match err {
                CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                    CliError::FileNotFound(path.as_ref().to_path_buf())
                }
                other => other,
            }
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_not_found() {
        let err = ConfigError::NotFound(PathBuf::from("docjson.config.json"));
        let msg = err.to_string();
        assert!(msg.contains("Config file not found"));
        assert!(msg.contains("docjson.config.json"));
        assert!(msg.contains("Hint:"));
    }

    #[test]
    fn test_config_error_invalid_value() {
        let err = ConfigError::InvalidValue {
            field: "render.maxParallel".to_string(),
            value: "0".to_string(),
            hint: "Use a positive number".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Invalid value for 'render.maxParallel'"));
        assert!(msg.contains("Use a positive number"));
    }

    #[test]
    fn test_render_failed_mentions_counts() {
        let err = CliError::RenderFailed { failed: 2, total: 7 };
        assert!(err.to_string().starts_with("2 of 7 declarations failed"));
    }

    #[test]
    fn test_cli_error_from_docs_error() {
        let err: CliError = DocsError::invalid_path("../x", "parent directory segment").into();
        assert!(matches!(err, CliError::Docs(DocsError::InvalidOutputPath { .. })));
    }

    #[test]
    fn test_result_ext_with_path() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));

        let err = result.with_path("/tmp/tree.json").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_result_ext_context() {
        let result: std::result::Result<(), DocsError> = Err(DocsError::Other {
            message: "boom".to_string(),
        });

        let err = result.context("Failed to render").unwrap_err();
        assert_eq!(err.to_string(), "Failed to render: boom");
    }
}
