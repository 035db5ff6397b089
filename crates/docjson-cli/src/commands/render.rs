//! Render command implementation.

use std::sync::Arc;
use std::time::Instant;

use docjson::{FileSystemWriter, JsonRenderer};
use tracing::{debug, info};

use crate::cli::RenderArgs;
use crate::commands::{load_tree, package_count};
use crate::config::{ConfigOverrides, DocjsonConfig};
use crate::error::{CliError, Result, ResultExt};
use crate::ui;

/// Execute the render command.
///
/// 1. Load and validate configuration
/// 2. Decode the documentation tree
/// 3. Optionally clean the output directory
/// 4. Render every declaration and report the outcome
///
/// Returns [`CliError::RenderFailed`] when any declaration could not be
/// written; all others are still written.
pub async fn execute(args: RenderArgs) -> Result<()> {
    let start = Instant::now();

    let overrides = ConfigOverrides::from(&args);
    let config = DocjsonConfig::load(&overrides, args.config.as_deref())?;
    config.validate()?;
    debug!(?config, "resolved configuration");

    let input = config.input_path()?;
    let tree = load_tree(input).await?;

    if config.clean && config.out_dir.exists() {
        info!(dir = %config.out_dir.display(), "cleaning output directory");
        tokio::fs::remove_dir_all(&config.out_dir)
            .await
            .context(format!("Failed to clean {}", config.out_dir.display()))?;
    }

    let writer = Arc::new(FileSystemWriter::new(&config.out_dir));
    let renderer = JsonRenderer::new(writer, config.render.clone());
    let total = renderer.plan(&tree).len();
    let report = renderer.render(&tree).await;

    for path in &report.collisions {
        ui::warning(&format!(
            "{path} is claimed by several declarations; the last one was kept (try --qualify-nested)"
        ));
    }
    for failure in &report.failures {
        ui::error(&format!("{}: {}", failure.path, failure.error));
    }

    ui::print_render_summary(
        &ui::RenderSummary {
            modules: tree.modules.len(),
            packages: package_count(&tree),
            declarations: total,
            written: report.written.len(),
            failed: report.failures.len(),
            collisions: report.collisions.len(),
        },
        Some(start.elapsed()),
    );

    if !report.is_success() {
        return Err(CliError::RenderFailed {
            failed: report.failures.len(),
            total,
        });
    }

    ui::success(&format!(
        "Rendered {} declarations to {}",
        report.written.len(),
        config.out_dir.display()
    ));
    Ok(())
}
