//! Rust FFI wrappers for opaque handles.

use handlegen_config::{HandleBinding, TemplateKind};
use handlegen_core::{to_pascal_case, to_snake_case};

use super::generated_banner;
use crate::builder::CodeBuilder;

/// What a handle wrapper does with the underlying handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandleKind {
    /// Owns the handle and releases it with `disposer` on drop.
    Global { disposer: String },
    /// Borrows the handle from its owning `Global` wrapper.
    Alias,
    /// Context-owned handle; copyable and never disposed.
    Context,
}

impl HandleKind {
    pub fn template_kind(&self) -> TemplateKind {
        match self {
            HandleKind::Global { .. } => TemplateKind::Global,
            HandleKind::Alias => TemplateKind::Alias,
            HandleKind::Context => TemplateKind::Context,
        }
    }
}

/// One (handle, template) binding, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandleTemplate {
    handle_name: String,
    kind: HandleKind,
}

impl HandleTemplate {
    pub fn new(handle_name: impl Into<String>, kind: HandleKind) -> Self {
        Self {
            handle_name: handle_name.into(),
            kind,
        }
    }

    pub fn global(handle_name: impl Into<String>, disposer: impl Into<String>) -> Self {
        Self::new(
            handle_name,
            HandleKind::Global {
                disposer: disposer.into(),
            },
        )
    }

    pub fn alias(handle_name: impl Into<String>) -> Self {
        Self::new(handle_name, HandleKind::Alias)
    }

    pub fn context(handle_name: impl Into<String>) -> Self {
        Self::new(handle_name, HandleKind::Context)
    }

    /// Build from a configuration entry. Returns `None` for a `global`
    /// binding without a disposer, which validated configurations never
    /// contain.
    pub fn from_binding(binding: &HandleBinding) -> Option<Self> {
        let kind = match binding.template() {
            TemplateKind::Global => HandleKind::Global {
                disposer: binding.disposer()?.to_string(),
            },
            TemplateKind::Alias => HandleKind::Alias,
            TemplateKind::Context => HandleKind::Context,
        };
        Some(Self::new(binding.name(), kind))
    }

    pub fn handle_name(&self) -> &str {
        &self.handle_name
    }

    pub fn kind(&self) -> &HandleKind {
        &self.kind
    }

    /// Output file name without extension (`llvm_module_ref`, `llvm_module_ref_alias`).
    pub fn file_stem(&self) -> String {
        let stem = to_snake_case(&self.handle_name);
        match self.kind {
            HandleKind::Alias => format!("{}_alias", stem),
            _ => stem,
        }
    }

    /// Name of the generated Rust type (`LlvmModuleRef`, `LlvmModuleRefAlias`).
    pub fn type_name(&self) -> String {
        let name = to_pascal_case(&self.handle_name);
        match self.kind {
            HandleKind::Alias => format!("{}Alias", name),
            _ => name,
        }
    }

    pub fn render(&self) -> String {
        let header = CodeBuilder::rust().line(&generated_banner("//")).blank();
        match &self.kind {
            HandleKind::Global { disposer } => self.render_global(header, disposer),
            HandleKind::Alias => self.render_alias(header),
            HandleKind::Context => self.render_context(header),
        }
        .build()
    }

    fn render_global(&self, b: CodeBuilder, disposer: &str) -> CodeBuilder {
        let ty = self.type_name();
        let handle = &self.handle_name;

        b.line("use std::ffi::c_void;")
            .line("use std::ptr::NonNull;")
            .blank()
            .block_with_close("unsafe extern \"C\" {", "}", |b| {
                b.line(&format!("fn {}(handle: *mut c_void);", disposer))
            })
            .blank()
            .rust_doc(&format!("Owning wrapper for `{}`.", handle))
            .rust_doc("")
            .rust_doc(&format!(
                "The handle is released with `{}` when dropped.",
                disposer
            ))
            .line("#[derive(Debug)]")
            .line("#[repr(transparent)]")
            .line(&format!("pub struct {}(NonNull<c_void>);", ty))
            .blank()
            .block_with_close(&format!("impl {} {{", ty), "}", |b| {
                Self::from_raw_fn(
                    b,
                    &format!("Take ownership of a raw `{}`, returning `None` for null.", handle),
                    &format!("`raw` must be a live `{}` not owned by anything else.", handle),
                    "NonNull::new(raw).map(Self)",
                )
                .blank()
                .rust_doc("Borrow the raw handle without giving up ownership.")
                .block_with_close("pub fn as_raw(&self) -> *mut c_void {", "}", |b| {
                    b.line("self.0.as_ptr()")
                })
                .blank()
                .rust_doc("Give up ownership without disposing the handle.")
                .block_with_close("pub fn into_raw(self) -> *mut c_void {", "}", |b| {
                    b.line("let raw = self.0.as_ptr();")
                        .line("std::mem::forget(self);")
                        .line("raw")
                })
            })
            .blank()
            .block_with_close(&format!("impl Drop for {} {{", ty), "}", |b| {
                b.block_with_close("fn drop(&mut self) {", "}", |b| {
                    b.line(&format!("unsafe {{ {}(self.0.as_ptr()) }}", disposer))
                })
            })
    }

    fn render_alias(&self, b: CodeBuilder) -> CodeBuilder {
        let ty = self.type_name();
        let owner = to_pascal_case(&self.handle_name);
        let owner_module = to_snake_case(&self.handle_name);
        let handle = &self.handle_name;

        b.line("use std::ffi::c_void;")
            .line("use std::marker::PhantomData;")
            .blank()
            .line(&format!("use super::{}::{};", owner_module, owner))
            .blank()
            .rust_doc(&format!(
                "Borrowed view of a `{}`; never disposes the handle.",
                handle
            ))
            .line("#[derive(Debug, Clone, Copy)]")
            .line("#[repr(transparent)]")
            .block_with_close(&format!("pub struct {}<'a> {{", ty), "}", |b| {
                b.line("raw: *mut c_void,")
                    .line(&format!("_owner: PhantomData<&'a {}>,", owner))
            })
            .blank()
            .block_with_close(&format!("impl<'a> {}<'a> {{", ty), "}", |b| {
                b.rust_doc("Borrow the handle held by `owner`.")
                    .block_with_close(
                        &format!("pub fn new(owner: &'a {}) -> Self {{", owner),
                        "}",
                        |b| {
                            b.block_with_close("Self {", "}", |b| {
                                b.line("raw: owner.as_raw(),").line("_owner: PhantomData,")
                            })
                        },
                    )
                    .blank()
                    .rust_doc(&format!(
                        "Wrap a raw `{}` owned elsewhere, returning `None` for null.",
                        handle
                    ))
                    .rust_doc("")
                    .rust_doc("# Safety")
                    .rust_doc("")
                    .rust_doc("The owner must outlive `'a`.")
                    .block_with_close(
                        "pub unsafe fn from_raw(raw: *mut c_void) -> Option<Self> {",
                        "}",
                        |b| {
                            b.line("(!raw.is_null()).then_some(Self {")
                                .indent()
                                .line("raw,")
                                .line("_owner: PhantomData,")
                                .dedent()
                                .line("})")
                        },
                    )
                    .blank()
                    .block_with_close("pub fn as_raw(&self) -> *mut c_void {", "}", |b| {
                        b.line("self.raw")
                    })
            })
    }

    fn render_context(&self, b: CodeBuilder) -> CodeBuilder {
        let ty = self.type_name();
        let handle = &self.handle_name;

        b.line("use std::ffi::c_void;")
            .line("use std::ptr::NonNull;")
            .blank()
            .rust_doc(&format!(
                "Context-owned `{}`; released together with its context.",
                handle
            ))
            .line("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]")
            .line("#[repr(transparent)]")
            .line(&format!("pub struct {}(NonNull<c_void>);", ty))
            .blank()
            .block_with_close(&format!("impl {} {{", ty), "}", |b| {
                Self::from_raw_fn(
                    b,
                    &format!("Wrap a raw `{}`, returning `None` for null.", handle),
                    "`raw` must stay valid for as long as its context is alive.",
                    "NonNull::new(raw).map(Self)",
                )
                .blank()
                .block_with_close("pub fn as_raw(&self) -> *mut c_void {", "}", |b| {
                    b.line("self.0.as_ptr()")
                })
            })
    }

    fn from_raw_fn(b: CodeBuilder, summary: &str, safety: &str, body: &str) -> CodeBuilder {
        b.rust_doc(summary)
            .rust_doc("")
            .rust_doc("# Safety")
            .rust_doc("")
            .rust_doc(safety)
            .block_with_close(
                "pub unsafe fn from_raw(raw: *mut c_void) -> Option<Self> {",
                "}",
                |b| b.line(body),
            )
    }
}
