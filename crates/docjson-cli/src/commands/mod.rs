//! Command implementations.
//!
//! - [`render`] - Render a documentation tree to JSON files
//! - [`check`] - Validate input and configuration
//!
//! Each command provides an `execute` function taking its parsed arguments.

pub mod check;
pub mod render;

pub use check::execute as check_execute;
pub use render::execute as render_execute;

use std::path::Path;

use docjson::DocumentationTree;
use tracing::debug;

use crate::error::{Result, ResultExt};

/// Reads and decodes the documentation tree at `path`.
pub(crate) async fn load_tree(path: &Path) -> Result<DocumentationTree> {
    let source = tokio::fs::read_to_string(path).await.with_path(path)?;
    let tree = DocumentationTree::from_json(&source)?;
    debug!(path = %path.display(), modules = tree.modules.len(), "loaded documentation tree");
    Ok(tree)
}

/// Number of packages across every module.
pub(crate) fn package_count(tree: &DocumentationTree) -> usize {
    tree.modules.iter().map(|module| module.packages.len()).sum()
}
