//! Windows module-definition file listing the library exports.

use super::generated_banner;
use crate::{ExportSet, builder::CodeBuilder};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportsTemplate {
    library: String,
    exports: ExportSet,
}

impl ExportsTemplate {
    pub fn new(library: impl Into<String>, exports: ExportSet) -> Self {
        Self {
            library: library.into(),
            exports,
        }
    }

    pub fn library(&self) -> &str {
        &self.library
    }

    pub fn exports(&self) -> &ExportSet {
        &self.exports
    }

    /// Render the `.def` text. Inlined functions have no symbol to export
    /// and are left out.
    pub fn render(&self) -> String {
        CodeBuilder::def_file()
            .line(&generated_banner(";"))
            .line(&format!("LIBRARY {}", self.library))
            .line("EXPORTS")
            .indent()
            .each(self.exports.exported(), |b, name| b.line(name))
            .dedent()
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_exports() -> ExportSet {
        ExportSet {
            core: vec!["LLVMContextCreate".into(), "LLVMShutdown".into()],
            extension: vec!["LibLLVMGetVersion".into()],
            inlined: vec!["LLVMInlineHelper".into()],
        }
    }

    #[test]
    fn test_render_snapshot() {
        let text = ExportsTemplate::new("Ubiquity.NET.LibLLVM", sample_exports()).render();
        let body = text.split_once('\n').map(|(_, rest)| rest).unwrap();

        insta::assert_snapshot!(body, @r"
        LIBRARY Ubiquity.NET.LibLLVM
        EXPORTS
            LLVMContextCreate
            LLVMShutdown
            LibLLVMGetVersion
        ");
    }

    #[test]
    fn test_inlined_functions_omitted() {
        let text = ExportsTemplate::new("LibLLVM", sample_exports()).render();

        assert!(text.starts_with("; Generated by handlegen v"));
        assert!(!text.contains("LLVMInlineHelper"));
    }

    #[test]
    fn test_empty_exports() {
        let text = ExportsTemplate::new("LibLLVM", ExportSet::default()).render();
        assert!(text.ends_with("LIBRARY LibLLVM\nEXPORTS\n"));
    }
}
