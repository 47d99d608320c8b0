//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod output;

use handlegen_codegen::DiagnosticSummary;

pub use check::CheckReport;
pub use generate::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};
pub use output::{Output, Report, TerminalOutput};

#[cfg(test)]
pub use output::BufferOutput;

/// Closing line shared by every report: `N errors, M warnings`.
fn render_summary(summary: &DiagnosticSummary, out: &mut dyn Output) {
    let line = format!(
        "{} error{}, {} warning{}",
        summary.errors,
        plural(summary.errors),
        summary.warnings,
        plural(summary.warnings)
    );
    if summary.is_success() {
        out.preformatted(&line);
    } else {
        out.warning(&line);
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
