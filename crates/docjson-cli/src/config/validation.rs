use docjson::VariantMerge;

use crate::config::DocjsonConfig;
use crate::error::{ConfigError, Result};

impl DocjsonConfig {
    /// Validate configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        self.input_path()?;

        if self.out_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "outDir".to_string(),
                value: "".to_string(),
                hint: "Output directory cannot be empty".to_string(),
            }
            .into());
        }

        if self.render.max_parallel == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "render.maxParallel".to_string(),
                value: "0".to_string(),
                hint: "At least one declaration must be emitted at a time".to_string(),
            }
            .into());
        }

        if let VariantMerge::Join { separator } = &self.render.variant_merge {
            if separator.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "render.variantMerge.separator".to_string(),
                    value: "".to_string(),
                    hint: "Use mode 'concatenate' to join variants without a separator".to_string(),
                }
                .into());
            }
        }

        Ok(())
    }
}
