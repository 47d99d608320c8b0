//! Generate operation - dispatch templates and write the results.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use handlegen_codegen::{Diagnostics, DispatchOptions, OutputWriter};

use crate::{
    options::Inputs,
    reports::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult},
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Root that relative handle outputs are resolved against.
    pub output_dir: &'a Path,
    /// Absolute path of the exports listing; `None` skips it.
    pub exports_def: Option<PathBuf>,
    /// Skip handle wrapper generation.
    pub no_handles: bool,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Descriptors are written as the dispatcher produces them; failures to
/// map a handle are counted, not fatal.
pub fn generate(inputs: &Inputs, opts: GenerateOptions) -> Result<GenerateReport> {
    let mut dispatch_options = DispatchOptions::from_config(&inputs.config);
    dispatch_options.generate_handles = !opts.no_handles;
    dispatch_options.exports_def_path = opts.exports_def;

    let dispatcher = super::dispatcher(&inputs.config, dispatch_options)?;
    let writer = OutputWriter::new(opts.output_dir);
    let mut diagnostics = Diagnostics::new();

    let result = if opts.dry_run {
        let files = dispatcher
            .dispatch(&inputs.ast, &mut diagnostics)
            .filter_map(|d| writer.preview(&d))
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let stats = writer
            .write_all(dispatcher.dispatch(&inputs.ast, &mut diagnostics))
            .wrap_err("Failed to write generated files")?;
        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: stats.written,
            unchanged: stats.unchanged,
        })
    };

    Ok(GenerateReport {
        library: inputs.config.library.clone(),
        summary: diagnostics.finish(),
        result,
    })
}
