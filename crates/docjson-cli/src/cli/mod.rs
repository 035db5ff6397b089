//! Command-line interface definition for docjson.
//!
//! # Command Structure
//!
//! - `docjson render` - Render a documentation tree to JSON files
//! - `docjson check` - Validate the input and configuration without writing

mod commands;
pub mod enums;
mod validation;

use clap::Parser;

pub use commands::{CheckArgs, Command, RenderArgs};
pub use enums::*;
pub use validation::{parse_parallelism, parse_separator};

/// docjson - per-declaration JSON documentation
#[derive(Parser, Debug)]
#[command(
    name = "docjson",
    version,
    about = "Render a documentation tree into one JSON file per declaration",
    long_about = "docjson reads a documentation tree exported as JSON and writes one\n\
                  document per class-like declaration, holding its flattened comment,\n\
                  its fields and its methods with parameter docs and tags."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Logs every emitted declaration.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
