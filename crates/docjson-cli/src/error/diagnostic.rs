//! Miette diagnostic conversion for CLI errors.

use docjson::DocsError;
use miette::Report;

use crate::error::CliError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Docs(e) => docs_error_to_miette(e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert a render library error to miette Report
pub fn docs_error_to_miette(err: DocsError) -> Report {
    match err {
        DocsError::Input(error) => miette::miette!(
            "Invalid documentation tree: {}\n\nHint: The input must be a documentation tree exported as JSON",
            error
        ),
        DocsError::Io { path, error } => miette::miette!(
            "Failed to write {}: {}\n\nHint: Check output directory permissions or choose another --out-dir",
            path.display(),
            error
        ),
        other => miette::miette!("{}", other),
    }
}
