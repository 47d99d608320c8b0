//! Check operation - dispatch without writing anything.

use eyre::Result;
use handlegen_ast::AstSource;
use handlegen_codegen::{Diagnostics, DispatchOptions, Template};

use crate::{options::Inputs, reports::CheckReport};

/// Execute the check operation.
///
/// Walks the AST exactly as `generate` would, counting descriptors and
/// collecting diagnostics, but never renders or writes.
pub fn check(inputs: &Inputs, with_exports: bool) -> Result<CheckReport> {
    let mut options = DispatchOptions::from_config(&inputs.config);
    if with_exports {
        // Only the presence of a path matters; nothing is written.
        options = options.with_exports(format!("{}.def", inputs.config.library));
    }

    let dispatcher = super::dispatcher(&inputs.config, options)?;
    let mut diagnostics = Diagnostics::new();

    let mut handle_descriptors = 0;
    let mut exported_functions = None;
    for descriptor in dispatcher.dispatch(&inputs.ast, &mut diagnostics) {
        match &descriptor.template {
            Template::Handle(_) => handle_descriptors += 1,
            Template::Exports(t) => {
                exported_functions = Some(t.exports().exported_len());
            }
        }
    }

    Ok(CheckReport {
        handles: inputs.ast.handles().count(),
        handle_descriptors,
        exported_functions,
        summary: diagnostics.finish(),
    })
}
