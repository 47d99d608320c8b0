//! Generate command report data structures.

use std::path::{Path, PathBuf};

use handlegen_codegen::DiagnosticSummary;

use super::{
    output::{Output, Report},
    plural, render_summary,
};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Library named in the exports listing.
    pub library: String,
    /// Final diagnostic tally; its error count is the exit status.
    pub summary: DiagnosticSummary,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Files created or updated.
    pub written: Vec<PathBuf>,
    /// Files that already matched.
    pub unchanged: Vec<PathBuf>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: PathBuf,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
        render_summary(&self.summary, out);
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Library", &self.library);
        out.key_value("Output", &written.output_dir.display().to_string());

        if !written.written.is_empty() {
            out.newline();
            out.section(&format!("Written ({})", written.written.len()));
            for path in &written.written {
                out.added_item(&display_relative(path, &written.output_dir));
            }
        }

        if !written.unchanged.is_empty() {
            out.newline();
            out.preformatted(&format!(
                "{} file{} unchanged",
                written.unchanged.len(),
                plural(written.unchanged.len())
            ));
        }
        out.newline();
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path.display().to_string());
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} file{} would be generated",
            preview.files.len(),
            plural(preview.files.len())
        ));
    }
}

/// Show paths under the output root relative to it.
fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
