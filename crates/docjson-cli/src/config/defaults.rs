use std::path::PathBuf;

/// Config file looked up in the current directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "docjson.config.json";

/// Prefix of environment variables read by the config loader.
pub const ENV_PREFIX: &str = "DOCJSON_";

/// Separator used by `--variant-merge join` when `--separator` is absent.
pub const DEFAULT_JOIN_SEPARATOR: &str = "\n\n";

pub fn default_out_dir() -> PathBuf {
    PathBuf::from("docs")
}
