use std::path::{Path, PathBuf};

use docjson::{OverloadPolicy, RenderOptions, VariantMerge};
use figment::{
    providers::{Env, Format as _, Json, Serialized},
    value::Uncased,
    Figment,
};
use serde::Serialize;

use crate::cli::{CheckArgs, RenderArgs};
use crate::config::conversions::variant_merge;
use crate::config::{default_out_dir, DocjsonConfig, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use crate::error::{ConfigError, Result};

/// Environment variables (without prefix) and the config keys they set.
const ENV_KEYS: &[(&str, &str)] = &[
    ("INPUT", "input"),
    ("OUT_DIR", "outDir"),
    ("CLEAN", "clean"),
    ("MAX_PARALLEL", "render.maxParallel"),
    ("OVERLOADS", "render.overloads"),
    ("QUALIFY_NESTED_NAMES", "render.qualifyNestedNames"),
    ("PRETTY", "render.pretty"),
];

/// Values given on the command line. Absent values leave lower layers
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clean: Option<bool>,
    #[serde(skip_serializing_if = "RenderOverrides::is_empty")]
    pub render: RenderOverrides,
}

/// Render options given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_parallel: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_merge: Option<VariantMerge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overloads: Option<OverloadPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualify_nested_names: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretty: Option<bool>,
}

impl RenderOverrides {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl From<&RenderArgs> for ConfigOverrides {
    fn from(args: &RenderArgs) -> Self {
        Self {
            input: args.input.clone(),
            out_dir: args.out_dir.clone(),
            clean: args.clean.then_some(true),
            render: RenderOverrides {
                max_parallel: args.max_parallel,
                variant_merge: args
                    .variant_merge
                    .map(|mode| variant_merge(mode, args.separator.as_deref())),
                overloads: args.overloads.map(Into::into),
                qualify_nested_names: args.qualify_nested.then_some(true),
                pretty: args.compact.then_some(false),
            },
        }
    }
}

impl From<&CheckArgs> for ConfigOverrides {
    fn from(args: &CheckArgs) -> Self {
        Self {
            input: args.input.clone(),
            ..Self::default()
        }
    }
}

impl Default for DocjsonConfig {
    fn default() -> Self {
        Self {
            input: None,
            out_dir: default_out_dir(),
            clean: false,
            render: RenderOptions::default(),
        }
    }
}

impl DocjsonConfig {
    /// Load configuration from every source.
    /// Priority: CLI args > environment variables > config file > defaults
    pub fn load(overrides: &ConfigOverrides, config_path: Option<&Path>) -> Result<Self> {
        Self::figment(overrides, config_path)?
            .extract()
            .map_err(|e| {
                ConfigError::InvalidValue {
                    field: "configuration".to_string(),
                    value: e.to_string(),
                    hint: "Check docjson.config.json syntax and field types".to_string(),
                }
                .into()
            })
    }

    /// The layered figment behind [`DocjsonConfig::load`].
    pub fn figment(overrides: &ConfigOverrides, config_path: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        match config_path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()).into());
            }
            Some(path) => figment = figment.merge(Json::file(path)),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    figment = figment.merge(Json::file(default_path));
                }
            }
        }

        // DOCJSON_OUT_DIR, DOCJSON_MAX_PARALLEL, ...
        figment = figment.merge(env_provider());

        Ok(figment.merge(Serialized::defaults(overrides.clone())))
    }
}

fn env_provider() -> Env {
    Env::prefixed(ENV_PREFIX)
        .filter_map(|key| config_key(key.as_str()).map(Uncased::from))
        .lowercase(false)
}

/// Config key set by the environment variable `env_key` (prefix stripped).
pub(crate) fn config_key(env_key: &str) -> Option<&'static str> {
    ENV_KEYS
        .iter()
        .find(|(env, _)| env.eq_ignore_ascii_case(env_key))
        .map(|(_, key)| *key)
}
