//! Configuration with multi-source loading.
//!
//! Merges settings from CLI args, environment variables and a config file.
//! Priority: CLI > Environment > File > Defaults

mod conversions;
mod defaults;
mod loading;
mod validation;

use std::path::{Path, PathBuf};

use docjson::RenderOptions;
use serde::{Deserialize, Serialize};

pub use defaults::*;
pub use loading::{ConfigOverrides, RenderOverrides};

/// docjson configuration - loaded from docjson.config.json, `DOCJSON_*`
/// environment variables and CLI args.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DocjsonConfig {
    /// Documentation tree exported as JSON
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,

    /// Output directory
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Remove the output directory before rendering
    #[serde(default)]
    pub clean: bool,

    /// Render pass options
    #[serde(default)]
    pub render: RenderOptions,
}

impl DocjsonConfig {
    /// The input path, or a `MissingField` error.
    pub fn input_path(&self) -> crate::error::Result<&Path> {
        self.input.as_deref().ok_or_else(|| {
            crate::error::ConfigError::MissingField {
                field: "input".to_string(),
                hint: "Pass the exported documentation tree as INPUT or set 'input' in docjson.config.json".to_string(),
            }
            .into()
        })
    }
}
