//! `[[handle]]` entries of handlegen.toml.

use std::{fmt, ops::Range};

use serde::Deserialize;
use toml::Spanned;

/// The kind of wrapper generated for a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    /// Owning wrapper released through a disposer function.
    Global,
    /// Borrowed view of a `global` handle; never disposes.
    Alias,
    /// Handle owned by a context and never disposed directly.
    Context,
}

impl TemplateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Alias => "alias",
            Self::Context => "context",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One handle-to-template binding.
///
/// ```toml
/// [[handle]]
/// name = "LLVMModuleRef"
/// template = "global"
/// disposer = "LLVMDisposeModule"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HandleBinding {
    name: Spanned<String>,
    template: TemplateKind,
    #[serde(default)]
    disposer: Option<Spanned<String>>,
}

impl HandleBinding {
    /// The handle typedef name.
    pub fn name(&self) -> &str {
        self.name.get_ref()
    }

    pub fn template(&self) -> TemplateKind {
        self.template
    }

    /// Disposer function for `global` bindings.
    pub fn disposer(&self) -> Option<&str> {
        self.disposer.as_ref().map(|d| d.get_ref().as_str())
    }

    /// Byte range of the name in the source.
    pub fn name_span(&self) -> Range<usize> {
        self.name.span()
    }

    /// Byte range of the disposer in the source, if one was given.
    pub fn disposer_span(&self) -> Option<Range<usize>> {
        self.disposer.as_ref().map(|d| d.span())
    }
}
