//! Terminal output: colored status lines and the render summary.
//!
//! Everything here writes to stderr so stdout stays free for piping.

mod format;
mod messages;

pub use format::{format_duration, print_render_summary, RenderSummary};
pub use messages::{error, info, success, warning};

/// Check if color output should be enabled.
///
/// Respects `NO_COLOR` and `FORCE_COLOR`, then falls back to terminal
/// detection on stderr.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr()
}

/// Initialize color support based on the environment.
///
/// Turns off `console` styling on stderr when colors should not be used.
pub fn init_colors() {
    console::set_colors_enabled_stderr(should_use_color());
}
