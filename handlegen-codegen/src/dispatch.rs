//! Template dispatch.
//!
//! [`TemplateDispatcher::dispatch`] walks the AST and yields one
//! [`GenerationDescriptor`] per applicable (handle, template) pair, followed
//! by a single descriptor for the exports listing when one is configured.
//! Descriptors are computed one at a time as the caller pulls them, and
//! problems are recorded in the borrowed [`Diagnostics`] instead of stopping
//! the walk.

use std::path::PathBuf;

use handlegen_ast::{AstSource, HandleEntity};
use handlegen_config::Config;

use crate::{
    Diagnostics, ExportClassifier, ExportsTemplate, GenerationDescriptor, HandleTemplate,
    HandleTemplateRegistry, Template,
};

/// Runtime switches for one dispatch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOptions {
    /// Produce handle wrapper descriptors at all.
    pub generate_handles: bool,
    /// Directory, relative to the output root, for handle wrappers.
    pub handle_output_dir: PathBuf,
    /// Where the exports listing goes; `None` disables export generation.
    pub exports_def_path: Option<PathBuf>,
    /// Collect inline functions into their own group instead of dropping them.
    pub inline_exports: bool,
    /// Value of the `LIBRARY` line.
    pub library: String,
}

impl DispatchOptions {
    /// Options taken from the configuration. Export generation stays off
    /// until a path is set with [`with_exports`](Self::with_exports).
    pub fn from_config(config: &Config) -> Self {
        Self {
            generate_handles: true,
            handle_output_dir: PathBuf::from(&config.handle_output),
            exports_def_path: None,
            inline_exports: config.inline_exports,
            library: config.library.clone(),
        }
    }

    pub fn with_exports(mut self, path: impl Into<PathBuf>) -> Self {
        self.exports_def_path = Some(path.into());
        self
    }

    pub fn without_handles(mut self) -> Self {
        self.generate_handles = false;
        self
    }
}

impl Default for DispatchOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Decides which templates apply to which AST entities.
#[derive(Debug, Clone)]
pub struct TemplateDispatcher {
    registry: HandleTemplateRegistry,
    options: DispatchOptions,
}

impl TemplateDispatcher {
    pub fn new(registry: HandleTemplateRegistry, options: DispatchOptions) -> Self {
        Self { registry, options }
    }

    pub fn registry(&self) -> &HandleTemplateRegistry {
        &self.registry
    }

    pub fn options(&self) -> &DispatchOptions {
        &self.options
    }

    /// Lazily produce the descriptors for `ast`.
    ///
    /// Unmapped handles are reported to `diagnostics` as errors when the
    /// iterator reaches them; dispatch itself never fails.
    pub fn dispatch<'a, 'd, A: AstSource>(
        &'a self,
        ast: &'a A,
        diagnostics: &'d mut Diagnostics,
    ) -> Dispatch<'a, 'd, A> {
        let handles: Option<Box<dyn Iterator<Item = &'a HandleEntity> + 'a>> =
            if self.options.generate_handles {
                Some(Box::new(ast.handles()))
            } else {
                None
            };

        Dispatch {
            dispatcher: self,
            ast,
            diagnostics,
            handles,
            pending: Default::default(),
            exports_pending: self.options.exports_def_path.is_some(),
        }
    }

    /// Templates for one handle, recording an error when none are bound.
    fn bindings_for(
        &self,
        handle: &HandleEntity,
        diagnostics: &mut Diagnostics,
    ) -> &[HandleTemplate] {
        if self.registry.is_reserved(&handle.name) {
            tracing::debug!(handle = %handle.name, "skipping reserved handle");
            return &[];
        }

        let templates = self.registry.lookup(&handle.name);
        if templates.is_empty() {
            diagnostics.error(format!(
                "No mapping for handle type {} - {}",
                handle.name,
                handle.location()
            ));
        }
        templates
    }

    fn handle_descriptor<'a>(&self, template: &'a HandleTemplate) -> GenerationDescriptor<'a> {
        tracing::debug!(
            handle = template.handle_name(),
            template = %template.kind().template_kind(),
            "dispatching handle template"
        );
        GenerationDescriptor::relative(
            Template::Handle(template),
            template.file_stem(),
            &self.options.handle_output_dir,
        )
    }

    fn exports_descriptor<'a, A: AstSource>(&self, ast: &A) -> Option<GenerationDescriptor<'a>> {
        let path = self.options.exports_def_path.as_ref()?;
        let exports = ExportClassifier::new(self.options.inline_exports).classify(ast);
        tracing::debug!(
            core = exports.core.len(),
            extension = exports.extension.len(),
            inlined = exports.inlined.len(),
            "classified exports"
        );
        Some(GenerationDescriptor::absolute(
            Template::Exports(ExportsTemplate::new(&self.options.library, exports)),
            path,
        ))
    }
}

/// Lazy descriptor stream returned by [`TemplateDispatcher::dispatch`].
///
/// Handle descriptors come first, in AST order and then binding order; the
/// exports descriptor, if any, is always last.
pub struct Dispatch<'a, 'd, A> {
    dispatcher: &'a TemplateDispatcher,
    ast: &'a A,
    diagnostics: &'d mut Diagnostics,
    handles: Option<Box<dyn Iterator<Item = &'a HandleEntity> + 'a>>,
    pending: std::slice::Iter<'a, HandleTemplate>,
    exports_pending: bool,
}

impl<'a, A: AstSource> Iterator for Dispatch<'a, '_, A> {
    type Item = GenerationDescriptor<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(template) = self.pending.next() {
                return Some(self.dispatcher.handle_descriptor(template));
            }

            if let Some(handles) = self.handles.as_mut() {
                match handles.next() {
                    Some(handle) => {
                        self.pending = self
                            .dispatcher
                            .bindings_for(handle, self.diagnostics)
                            .iter();
                        continue;
                    }
                    None => self.handles = None,
                }
            }

            if self.exports_pending {
                self.exports_pending = false;
                return self.dispatcher.exports_descriptor(self.ast);
            }

            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, path::Path};

    use handlegen_ast::FunctionEntity;

    use super::*;
    use crate::OutputPath;

    /// Minimal source that counts how often functions are requested.
    #[derive(Default)]
    struct FakeAst {
        handles: Vec<HandleEntity>,
        functions: Vec<FunctionEntity>,
        function_scans: Cell<usize>,
    }

    impl FakeAst {
        fn handle(mut self, name: &str, line: u32) -> Self {
            self.handles.push(HandleEntity {
                name: name.to_string(),
                file: PathBuf::from("llvm-c/Types.h"),
                line,
            });
            self
        }

        fn function(mut self, name: &str, unit: &str) -> Self {
            self.functions.push(FunctionEntity {
                name: name.to_string(),
                translation_unit: PathBuf::from(unit),
                is_inline: false,
                is_ignored: false,
            });
            self
        }
    }

    impl AstSource for FakeAst {
        fn handles(&self) -> impl Iterator<Item = &HandleEntity> {
            self.handles.iter()
        }

        fn functions(&self) -> impl Iterator<Item = &FunctionEntity> {
            self.function_scans.set(self.function_scans.get() + 1);
            self.functions.iter()
        }

        fn is_extension_header(&self, unit: &Path) -> bool {
            unit.starts_with("ext")
        }

        fn is_core_header(&self, unit: &Path) -> bool {
            unit.starts_with("core")
        }
    }

    fn dispatcher(options: DispatchOptions) -> TemplateDispatcher {
        let registry = HandleTemplateRegistry::new(
            [
                HandleTemplate::global("LLVMModuleRef", "LLVMDisposeModule"),
                HandleTemplate::alias("LLVMModuleRef"),
                HandleTemplate::context("LLVMValueRef"),
            ],
            Vec::<String>::new(),
        )
        .unwrap();
        TemplateDispatcher::new(registry, options)
    }

    #[test]
    fn test_descriptors_follow_ast_then_binding_order() {
        let ast = FakeAst::default()
            .handle("LLVMValueRef", 1)
            .handle("LLVMModuleRef", 2);
        let dispatcher = dispatcher(DispatchOptions::default());
        let mut diags = Diagnostics::new();

        let described: Vec<_> = dispatcher
            .dispatch(&ast, &mut diags)
            .map(|d| d.template.describe())
            .collect();

        assert_eq!(
            described,
            vec![
                "context LLVMValueRef",
                "global LLVMModuleRef",
                "alias LLVMModuleRef"
            ]
        );
        assert_eq!(diags.error_count(), 0);
    }

    #[test]
    fn test_handle_descriptor_output() {
        let ast = FakeAst::default().handle("LLVMValueRef", 1);
        let dispatcher = dispatcher(DispatchOptions::default());
        let mut diags = Diagnostics::new();

        let descriptors: Vec<_> = dispatcher.dispatch(&ast, &mut diags).collect();

        assert_eq!(descriptors.len(), 1);
        assert!(descriptors[0].valid);
        assert_eq!(
            descriptors[0].output,
            OutputPath::Relative {
                file_stem: "llvm_value_ref".into(),
                directory: PathBuf::from("handles"),
            }
        );
    }

    #[test]
    fn test_unmapped_handle_reports_error() {
        let ast = FakeAst::default().handle("LLVMBarRef", 7);
        let dispatcher = dispatcher(DispatchOptions::default());
        let mut diags = Diagnostics::new();

        assert_eq!(dispatcher.dispatch(&ast, &mut diags).count(), 0);

        let errors: Vec<_> = diags.errors().map(|d| d.message.as_str()).collect();
        assert_eq!(
            errors,
            vec!["No mapping for handle type LLVMBarRef - llvm-c/Types.h@7"]
        );
    }

    #[test]
    fn test_errors_recorded_lazily() {
        let ast = FakeAst::default()
            .handle("LLVMValueRef", 1)
            .handle("LLVMBarRef", 2);
        let dispatcher = dispatcher(DispatchOptions::default());
        let mut diags = Diagnostics::new();

        {
            let mut dispatch = dispatcher.dispatch(&ast, &mut diags);
            assert!(dispatch.next().is_some());
        }
        assert_eq!(diags.error_count(), 0);

        dispatcher.dispatch(&ast, &mut diags).for_each(drop);
        assert_eq!(diags.error_count(), 1);
    }

    #[test]
    fn test_handles_disabled() {
        let ast = FakeAst::default().handle("LLVMBarRef", 1);
        let dispatcher = dispatcher(DispatchOptions::default().without_handles());
        let mut diags = Diagnostics::new();

        assert_eq!(dispatcher.dispatch(&ast, &mut diags).count(), 0);
        assert_eq!(diags.error_count(), 0);
    }

    #[test]
    fn test_classifier_runs_only_with_exports_path() {
        let ast = FakeAst::default()
            .handle("LLVMValueRef", 1)
            .function("LLVMShutdown", "core/llvm-c/Core.h");
        let mut diags = Diagnostics::new();

        let without = dispatcher(DispatchOptions::default());
        assert_eq!(without.dispatch(&ast, &mut diags).count(), 1);
        assert_eq!(ast.function_scans.get(), 0);

        let with = dispatcher(DispatchOptions::default().with_exports("/out/LibLLVM.def"));
        let descriptors: Vec<_> = with.dispatch(&ast, &mut diags).collect();

        assert_eq!(ast.function_scans.get(), 1);
        assert_eq!(descriptors.len(), 2);
        let last = descriptors.last().unwrap();
        assert_eq!(
            last.output,
            OutputPath::Absolute(PathBuf::from("/out/LibLLVM.def"))
        );
        match &last.template {
            Template::Exports(t) => assert_eq!(t.exports().core, vec!["LLVMShutdown"]),
            other => panic!("expected exports template, got {other:?}"),
        }
    }
}
