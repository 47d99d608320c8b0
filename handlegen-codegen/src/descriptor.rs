//! The output contract between the dispatcher and the renderer.

use std::path::{Path, PathBuf};

use handlegen_core::GeneratedFile;

use crate::Template;

/// Where a descriptor's output lands. Exactly one form applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputPath {
    /// Fixed location, used as-is.
    Absolute(PathBuf),
    /// File stem inside a directory that is relative to the output root.
    Relative {
        file_stem: String,
        directory: PathBuf,
    },
}

/// One unit of work for the renderer: a template plus where its output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationDescriptor<'a> {
    /// Renderers skip descriptors that are not valid.
    pub valid: bool,
    pub template: Template<'a>,
    pub output: OutputPath,
}

impl<'a> GenerationDescriptor<'a> {
    pub fn relative(
        template: Template<'a>,
        file_stem: impl Into<String>,
        directory: impl Into<PathBuf>,
    ) -> Self {
        Self {
            valid: true,
            template,
            output: OutputPath::Relative {
                file_stem: file_stem.into(),
                directory: directory.into(),
            },
        }
    }

    pub fn absolute(template: Template<'a>, path: impl Into<PathBuf>) -> Self {
        Self {
            valid: true,
            template,
            output: OutputPath::Absolute(path.into()),
        }
    }

    /// Final output path: `root/directory/file_stem.ext`, or the absolute
    /// path unchanged.
    pub fn resolve(&self, output_root: &Path) -> PathBuf {
        match &self.output {
            OutputPath::Absolute(path) => path.clone(),
            OutputPath::Relative {
                file_stem,
                directory,
            } => output_root
                .join(directory)
                .join(format!("{}.{}", file_stem, self.template.file_extension())),
        }
    }
}

impl GeneratedFile for GenerationDescriptor<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        self.resolve(base)
    }

    fn render(&self) -> String {
        self.template.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ExportSet, ExportsTemplate, HandleTemplate};

    #[test]
    fn test_resolve_relative() {
        let handle = HandleTemplate::alias("LLVMModuleRef");
        let desc =
            GenerationDescriptor::relative(Template::Handle(&handle), handle.file_stem(), "handles");

        assert_eq!(
            desc.resolve(Path::new("/out")),
            PathBuf::from("/out/handles/llvm_module_ref_alias.rs")
        );
    }

    #[test]
    fn test_resolve_absolute_ignores_root() {
        let desc = GenerationDescriptor::absolute(
            Template::Exports(ExportsTemplate::new("LibLLVM", ExportSet::default())),
            "/build/LibLLVM.def",
        );

        assert!(desc.valid);
        assert_eq!(
            desc.resolve(Path::new("/out")),
            PathBuf::from("/build/LibLLVM.def")
        );
    }
}
