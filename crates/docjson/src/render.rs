//! The render pass: walk every module, emit one JSON document per
//! declaration.
//!
//! Record construction and writing for each declaration run as independent
//! tasks on a `JoinSet`. A `Semaphore` bounds how many are in flight, and
//! the pass returns only after every spawned task has settled. A failing
//! declaration never stops the others; failures are collected in the
//! [`RenderReport`].

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tokio::sync::Semaphore;
use tokio::task::{self, JoinSet};
use tracing::{debug, info, warn};

use crate::emitter::{output_path, serialize_record, RecordBuilder, JSON_EXTENSION};
use crate::error::{DocsError, Result};
use crate::model::DocumentationTree;
use crate::options::RenderOptions;
use crate::walker::{walk_module, DeclarationSite};
use crate::writer::OutputWriter;

/// A declaration whose document could not be produced.
#[derive(Debug)]
pub struct RenderFailure {
    pub path: String,
    pub error: DocsError,
}

/// Outcome of a render pass.
#[derive(Debug, Default)]
pub struct RenderReport {
    /// Logical paths written, sorted and deduplicated.
    pub written: Vec<String>,
    /// Declarations that failed, sorted by path.
    pub failures: Vec<RenderFailure>,
    /// Paths claimed by more than one declaration. The last write wins.
    pub collisions: Vec<String>,
}

impl RenderReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Escalates the first failure, if any.
    pub fn into_result(self) -> Result<Vec<String>> {
        match self.failures.into_iter().next() {
            Some(failure) => Err(failure.error),
            None => Ok(self.written),
        }
    }
}

/// Renders a [`DocumentationTree`] through an [`OutputWriter`].
#[derive(Clone)]
pub struct JsonRenderer {
    writer: Arc<dyn OutputWriter>,
    options: RenderOptions,
}

impl std::fmt::Debug for JsonRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonRenderer")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl JsonRenderer {
    pub fn new(writer: Arc<dyn OutputWriter>, options: RenderOptions) -> Self {
        Self { writer, options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Every declaration that would be emitted, with its output path, in
    /// walk order.
    pub fn plan(&self, tree: &DocumentationTree) -> Vec<(String, DeclarationSite)> {
        let mut planned = Vec::new();
        for module in &tree.modules {
            walk_module(module, &self.options, &mut |site: DeclarationSite| {
                planned.push((output_path(&site, &self.options), site));
            });
        }
        planned
    }

    /// Runs the render pass and waits for every emit task to settle.
    pub async fn render(&self, tree: &DocumentationTree) -> RenderReport {
        let planned = self.plan(tree);
        let collisions = find_collisions(&planned);
        for path in &collisions {
            warn!(path = %path, "several declarations share this output path; last write wins");
        }

        let builder = Arc::new(RecordBuilder::new(&self.options));
        let semaphore = Arc::new(Semaphore::new(self.options.parallelism()));
        let pretty = self.options.pretty;

        let mut join_set = JoinSet::new();
        let mut task_paths: FxHashMap<task::Id, String> = FxHashMap::default();

        for (path, site) in planned {
            let permit = match Arc::clone(&semaphore).acquire_owned().await {
                Ok(permit) => permit,
                Err(error) => {
                    warn!(path = %path, "emit pool closed: {error}");
                    break;
                }
            };
            let builder = Arc::clone(&builder);
            let writer = Arc::clone(&self.writer);
            let task_path = path.clone();

            let handle = join_set.spawn(async move {
                let outcome = emit(&builder, writer.as_ref(), &site, &task_path, pretty).await;
                drop(permit);
                (task_path, outcome)
            });
            task_paths.insert(handle.id(), path);
        }

        let mut report = RenderReport {
            collisions,
            ..RenderReport::default()
        };

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((path, Ok(()))) => report.written.push(path),
                Ok((path, Err(error))) => {
                    warn!(path = %path, "failed to emit declaration: {error}");
                    report.failures.push(RenderFailure { path, error });
                }
                Err(join_error) => {
                    let path = task_paths
                        .remove(&join_error.id())
                        .unwrap_or_else(|| "unknown".to_string());
                    warn!(path = %path, "emit task panicked: {join_error}");
                    report.failures.push(RenderFailure {
                        error: DocsError::TaskFailed {
                            path: path.clone(),
                            message: join_error.to_string(),
                        },
                        path,
                    });
                }
            }
        }

        report.written.sort();
        report.written.dedup();
        report.failures.sort_by(|a, b| a.path.cmp(&b.path));

        info!(
            written = report.written.len(),
            failed = report.failures.len(),
            collisions = report.collisions.len(),
            "render pass finished"
        );
        report
    }

    /// Blocking entry point: runs [`JsonRenderer::render`] on a dedicated
    /// multi-threaded runtime. Must not be called from within a runtime.
    pub fn render_blocking(&self, tree: &DocumentationTree) -> Result<RenderReport> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.options.parallelism())
            .enable_all()
            .build()
            .map_err(|error| DocsError::Other {
                message: format!("failed to start render runtime: {error}"),
            })?;
        Ok(runtime.block_on(self.render(tree)))
    }
}

async fn emit(
    builder: &RecordBuilder,
    writer: &dyn OutputWriter,
    site: &DeclarationSite,
    path: &str,
    pretty: bool,
) -> Result<()> {
    let record = builder.build(&site.declaration);
    let json = serialize_record(path, &record, pretty)?;
    writer.write(path, &json, JSON_EXTENSION).await?;
    debug!(path, fields = record.fields.len(), methods = record.methods.len(), "emitted declaration");
    Ok(())
}

/// Output paths claimed by more than one planned declaration, sorted.
pub fn find_collisions(planned: &[(String, DeclarationSite)]) -> Vec<String> {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for (path, _) in planned {
        *counts.entry(path.as_str()).or_default() += 1;
    }
    let mut collisions: Vec<String> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(path, _)| path.to_string())
        .collect();
    collisions.sort();
    collisions
}
