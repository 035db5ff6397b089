use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::enums::*;
use crate::cli::validation::{parse_parallelism, parse_separator};

/// Available docjson subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a documentation tree to JSON files
    ///
    /// Writes `<out-dir>/<package path>/<Declaration>.json` for every
    /// class-like declaration, nested ones included.
    Render(RenderArgs),

    /// Validate input and configuration without writing
    ///
    /// Parses the documentation tree, validates docjson.config.json and
    /// reports declaration counts and predicted output path collisions.
    Check(CheckArgs),
}

/// Arguments for the render command
#[derive(Args, Debug, Default)]
pub struct RenderArgs {
    /// Documentation tree exported as JSON
    ///
    /// Falls back to the `input` field of the config file.
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output directory for rendered documents
    #[arg(short = 'd', long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Path to config file
    ///
    /// Defaults to docjson.config.json in the current directory, if present.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Maximum number of declarations emitted concurrently
    #[arg(short = 'j', long, value_name = "N", value_parser = parse_parallelism)]
    pub max_parallel: Option<usize>,

    /// How text from several build variants is combined
    #[arg(long, value_enum, value_name = "MODE")]
    pub variant_merge: Option<VariantMergeMode>,

    /// Separator used by `--variant-merge join`
    #[arg(long, value_name = "SEP", value_parser = parse_separator, requires = "variant_merge")]
    pub separator: Option<String>,

    /// How members sharing a name are keyed
    #[arg(long, value_enum, value_name = "POLICY")]
    pub overloads: Option<OverloadMode>,

    /// Name nested declarations after their enclosing chain (Outer.Inner)
    #[arg(long)]
    pub qualify_nested: bool,

    /// Write compact JSON instead of indented JSON
    #[arg(long)]
    pub compact: bool,

    /// Remove the output directory before rendering
    #[arg(long)]
    pub clean: bool,
}

/// Arguments for the check command
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Documentation tree exported as JSON
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
