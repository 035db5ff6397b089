//! Render summary formatting.

use std::time::Duration;

use console::Term;
use owo_colors::OwoColorize;

/// Counts shown after a render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub modules: usize,
    pub packages: usize,
    pub declarations: usize,
    pub written: usize,
    pub failed: usize,
    pub collisions: usize,
}

/// Format a duration as `ms`, seconds, or `m s`.
///
/// ```
/// use std::time::Duration;
/// use docjson_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// Print the render summary table to stderr.
pub fn print_render_summary(summary: &RenderSummary, elapsed: Option<Duration>) {
    let width = Term::stderr().size().1 as usize;

    eprintln!("\n{}", "Render Summary".bold().underline());
    eprintln!("{}", "─".repeat(width.clamp(20, 80)));

    for (label, value) in summary_rows(summary) {
        eprintln!("  {:<14} {}", label, value.to_string().cyan());
    }

    eprintln!("{}", "─".repeat(width.clamp(20, 80)));
    if let Some(elapsed) = elapsed {
        eprintln!("  {:<14} {}", "Time", format_duration(elapsed).dimmed());
    }
}

fn summary_rows(summary: &RenderSummary) -> Vec<(&'static str, usize)> {
    let mut rows = vec![
        ("Modules", summary.modules),
        ("Packages", summary.packages),
        ("Declarations", summary.declarations),
        ("Written", summary.written),
    ];
    if summary.failed > 0 {
        rows.push(("Failed", summary.failed));
    }
    if summary.collisions > 0 {
        rows.push(("Collisions", summary.collisions));
    }
    rows
}
