//! Check command implementation.
//!
//! Validates configuration and input without writing anything.

use docjson::{find_collisions, JsonRenderer, MemoryWriter};
use std::sync::Arc;

use crate::cli::CheckArgs;
use crate::commands::{load_tree, package_count};
use crate::config::{ConfigOverrides, DocjsonConfig};
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load and validate configuration
/// 2. Decode the documentation tree
/// 3. Plan every output path and report collisions
pub async fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking configuration...");
    let config = DocjsonConfig::load(&ConfigOverrides::from(&args), args.config.as_deref())?;
    config.validate()?;
    ui::success("Configuration is valid!");

    let input = config.input_path()?;
    ui::info(&format!("Reading {}...", input.display()));
    let tree = load_tree(input).await?;

    // Planning never touches the writer.
    let renderer = JsonRenderer::new(Arc::new(MemoryWriter::new()), config.render.clone());
    let planned = renderer.plan(&tree);

    ui::success(&format!(
        "{} modules, {} packages, {} declarations",
        tree.modules.len(),
        package_count(&tree),
        planned.len()
    ));

    let collisions = find_collisions(&planned);
    if collisions.is_empty() {
        ui::success("No output path collisions");
    } else {
        for path in &collisions {
            ui::warning(&format!("{path} would be written by several declarations"));
        }
        ui::warning("Pass --qualify-nested to render to give nested declarations unique paths");
    }

    ui::success("All checks passed!");
    Ok(())
}
