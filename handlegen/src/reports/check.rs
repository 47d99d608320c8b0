//! Check command report data structures.

use handlegen_codegen::DiagnosticSummary;

use super::{
    output::{Output, Report},
    render_summary,
};

/// Report data from a dry dispatch.
#[derive(Debug)]
pub struct CheckReport {
    /// Handles found in the AST.
    pub handles: usize,
    /// Descriptors that `generate` would render for handles.
    pub handle_descriptors: usize,
    /// Functions in the exports listing, when exports were classified.
    pub exported_functions: Option<usize>,
    pub summary: DiagnosticSummary,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.summary.is_success()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Handles", &self.handles.to_string());
        out.key_value("Wrappers", &self.handle_descriptors.to_string());
        if let Some(count) = self.exported_functions {
            out.key_value("Exports", &count.to_string());
        }

        let unmapped: Vec<_> = self
            .summary
            .diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .collect();
        if !unmapped.is_empty() {
            out.newline();
            out.section("Errors");
            for diagnostic in unmapped {
                out.list_item(&diagnostic.message);
            }
        }

        out.newline();
        render_summary(&self.summary, out);
        if self.is_valid() {
            out.preformatted("✓ all handles are mapped");
        }
    }
}
