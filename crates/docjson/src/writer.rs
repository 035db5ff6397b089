//! Output sinks for emitted documents.
//!
//! Writers are shared by every emit task of a render pass, so they take
//! `&self` and must be safe to call concurrently. Writes to distinct paths
//! never interfere; concurrent writes to one path leave whichever finished
//! last.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use indexmap::IndexMap;
use parking_lot::Mutex;
use tokio::task;

use crate::error::{DocsError, Result};

/// Destination for rendered documents.
#[async_trait]
pub trait OutputWriter: Send + Sync {
    /// Writes `content` under the logical `path` (no extension) with
    /// `extension` appended, e.g. `("geo/Point", json, ".json")`.
    async fn write(&self, path: &str, content: &str, extension: &str) -> Result<()>;
}

/// Writes documents below a root directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSystemWriter {
    root: PathBuf,
}

impl FileSystemWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a logical path below the root, rejecting anything that
    /// could land outside it.
    pub fn resolve(&self, path: &str, extension: &str) -> Result<PathBuf> {
        let relative = Path::new(path);
        if path.is_empty() {
            return Err(DocsError::invalid_path(path, "empty path"));
        }

        for component in relative.components() {
            match component {
                Component::Normal(_) => {}
                Component::CurDir => {}
                Component::ParentDir => {
                    return Err(DocsError::invalid_path(path, "parent directory segment"));
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Err(DocsError::invalid_path(path, "absolute path"));
                }
            }
        }

        Ok(self.root.join(format!("{path}{extension}")))
    }
}

// The one place allowed to touch std::fs.
#[allow(clippy::disallowed_methods)]
#[async_trait]
impl OutputWriter for FileSystemWriter {
    async fn write(&self, path: &str, content: &str, extension: &str) -> Result<()> {
        let destination = self.resolve(path, extension)?;
        let content = content.to_string();

        task::spawn_blocking(move || {
            if let Some(parent) = destination.parent() {
                std::fs::create_dir_all(parent).map_err(|error| DocsError::Io {
                    path: parent.to_path_buf(),
                    error,
                })?;
            }
            std::fs::write(&destination, content).map_err(|error| DocsError::Io {
                path: destination.clone(),
                error,
            })
        })
        .await
        .map_err(|error| DocsError::TaskFailed {
            path: path.to_string(),
            message: error.to_string(),
        })?
    }
}

/// Keeps documents in memory, keyed by `path + extension`.
#[derive(Debug, Default)]
pub struct MemoryWriter {
    documents: Mutex<IndexMap<String, String>>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content written to `key`, if any.
    pub fn get(&self, key: &str) -> Option<String> {
        self.documents.lock().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.documents.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.lock().is_empty()
    }

    /// Every written document, sorted by key.
    pub fn snapshot(&self) -> Vec<(String, String)> {
        let mut documents: Vec<_> = self
            .documents
            .lock()
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        documents.sort();
        documents
    }
}

#[async_trait]
impl OutputWriter for MemoryWriter {
    async fn write(&self, path: &str, content: &str, extension: &str) -> Result<()> {
        self.documents
            .lock()
            .insert(format!("{path}{extension}"), content.to_string());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;

    #[test]
    fn resolve_rejects_escaping_paths() {
        let writer = FileSystemWriter::new("/tmp/out");

        assert!(writer.resolve("geo/Point", ".json").is_ok());
        assert!(matches!(
            writer.resolve("../etc/passwd", ".json"),
            Err(DocsError::InvalidOutputPath { .. })
        ));
        assert!(matches!(
            writer.resolve("/abs/Point", ".json"),
            Err(DocsError::InvalidOutputPath { .. })
        ));
        assert!(writer.resolve("", ".json").is_err());
    }

    #[test]
    fn resolve_appends_extension() {
        let writer = FileSystemWriter::new("out");
        let path = writer.resolve("geo/Point", ".json").expect("valid path");
        assert_eq!(path, Path::new("out").join("geo/Point.json"));
    }

    #[tokio::test]
    async fn memory_writer_keeps_last_write() {
        let writer = MemoryWriter::new();
        writer.write("geo/Point", "{}", ".json").await.expect("write");
        writer.write("geo/Point", "[]", ".json").await.expect("write");

        assert_eq!(writer.len(), 1);
        assert_eq!(writer.get("geo/Point.json").as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn filesystem_writer_creates_directories() {
        let temp = tempfile::tempdir().expect("tempdir");
        let writer = FileSystemWriter::new(temp.path());

        writer
            .write("a/b/c/Deep", "{\"comment\":\"\"}", ".json")
            .await
            .expect("write");

        let written = std::fs::read_to_string(temp.path().join("a/b/c/Deep.json")).expect("read");
        assert_eq!(written, "{\"comment\":\"\"}");
    }
}
