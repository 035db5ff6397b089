//! Logging setup for the docjson CLI.
//!
//! Built on `tracing`. The library emits events (one `debug!` per emitted
//! declaration, an `info!` summary per render pass, `warn!` on failures and
//! path collisions); this module installs the subscriber that prints them.
//!
//! # Example
//!
//! ```rust,no_run
//! use docjson_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false);
//! info!("Rendering documentation");
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "docjson=debug,docjson_cli=debug";
const QUIET_FILTER: &str = "docjson=error,docjson_cli=error";
const DEFAULT_FILTER: &str = "docjson=info,docjson_cli=info";

/// Initialize the tracing subscriber.
///
/// The filter is chosen in this order:
/// 1. `--verbose`: debug for docjson crates
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG`
/// 4. info for docjson crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(filter_for(verbose, quiet), no_color);
}

/// Initialize logger with a custom environment filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .compact();

    // A second initialization (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_overrides_quiet() {
        let filter = filter_for(true, true).to_string();
        assert!(filter.contains("docjson=debug"));
        assert!(!filter.contains("error"));
    }

    #[test]
    fn test_quiet_filter() {
        let filter = filter_for(false, true).to_string();
        assert!(filter.contains("docjson_cli=error"));
    }

    #[test]
    fn test_repeated_initialization_does_not_panic() {
        init_logger(false, true, true);
        init_logger(true, false, true);
    }
}
