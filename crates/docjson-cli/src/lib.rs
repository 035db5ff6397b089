//! docjson CLI - render a documentation tree exported as JSON into one JSON
//! document per class-like declaration.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - `render` and `check`
//! - [`config`] - `docjson.config.json` loading and validation
//! - [`error`] - error types with actionable messages
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - colored status output
//!
//! # Example
//!
//! ```rust
//! use docjson_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{cli_error_to_miette, CliError, ConfigError, Result, ResultExt};
