//! Template dispatch and export classification for handlegen.
//!
//! Given a parsed header AST, this crate decides which templates apply to
//! which opaque handles and which functions belong in which export group.
//! Rendering the chosen templates and writing them to disk live here too,
//! but they only ever act on the [`GenerationDescriptor`]s produced by the
//! dispatcher.
//!
//! # Module Organization
//!
//! - [`registry`] - Handle name to template bindings ([`HandleTemplateRegistry`])
//! - [`diagnostics`] - Severity-counted diagnostics ([`Diagnostics`])
//! - [`exports`] - Export classification ([`ExportClassifier`], [`ExportSet`])
//! - [`dispatch`] - The lazy descriptor producer ([`TemplateDispatcher`])
//! - [`descriptor`] - The output contract ([`GenerationDescriptor`])
//! - [`templates`] - Handle wrapper and `.def` templates
//! - [`builder`] - Indented text building blocks
//! - [`writer`] - Rendering descriptors to disk

pub mod builder;
pub mod descriptor;
pub mod diagnostics;
pub mod dispatch;
pub mod exports;
pub mod registry;
pub mod templates;
pub mod writer;

pub use descriptor::{GenerationDescriptor, OutputPath};
pub use diagnostics::{Diagnostic, DiagnosticSummary, Diagnostics, Severity};
pub use dispatch::{Dispatch, DispatchOptions, TemplateDispatcher};
pub use exports::{ExportClassifier, ExportSet};
pub use registry::{HandleTemplateRegistry, RegistryError};
pub use templates::{ExportsTemplate, HandleTemplate, Template};
pub use writer::{OutputWriter, PreviewFile, WriteStats};
