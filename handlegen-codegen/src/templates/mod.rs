//! Templates referenced by generation descriptors.
//!
//! - [`HandleTemplate`] - Rust FFI wrapper for one opaque handle
//! - [`ExportsTemplate`] - Module-definition (`.def`) exports listing

mod def_file;
mod handle;

pub use def_file::ExportsTemplate;
pub use handle::{HandleKind, HandleTemplate};

/// First line of every generated artifact.
pub(crate) fn generated_banner(comment: &str) -> String {
    format!(
        "{} Generated by handlegen v{}. Do not edit.",
        comment,
        env!("CARGO_PKG_VERSION")
    )
}

/// A template a descriptor asks the renderer to expand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Template<'a> {
    /// Wrapper for one handle, borrowed from the registry.
    Handle(&'a HandleTemplate),
    /// Exports listing built from the classified functions.
    Exports(ExportsTemplate),
}

impl Template<'_> {
    /// Extension of the rendered file, without the dot.
    pub fn file_extension(&self) -> &'static str {
        match self {
            Template::Handle(_) => "rs",
            Template::Exports(_) => "def",
        }
    }

    /// Short identifier used in reports (e.g., `global LLVMModuleRef`).
    pub fn describe(&self) -> String {
        match self {
            Template::Handle(t) => format!("{} {}", t.kind().template_kind(), t.handle_name()),
            Template::Exports(t) => format!("exports {}", t.library()),
        }
    }

    pub fn render(&self) -> String {
        match self {
            Template::Handle(t) => t.render(),
            Template::Exports(t) => t.render(),
        }
    }
}
