//! Export classification.
//!
//! Partitions the functions of the AST into the groups written to the
//! module-definition file. Provenance comes from the owning translation
//! unit; anything that is neither an extension nor a core header (system
//! headers, third-party declarations the parser happened to see) is left
//! out of every group without a diagnostic.

use handlegen_ast::{AstSource, FunctionEntity};

/// The group a function is exported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportClass {
    /// Declared in a base library header.
    Core,
    /// Declared in a library-specific extension header.
    Extension,
    /// Declared `inline`; has no linkable symbol.
    Inlined,
}

/// Disjoint export groups, each in AST order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSet {
    pub core: Vec<String>,
    pub extension: Vec<String>,
    /// Only populated when inline support is enabled; never exported.
    pub inlined: Vec<String>,
}

impl ExportSet {
    /// Names written to the exports listing: core first, then extension.
    pub fn exported(&self) -> impl Iterator<Item = &str> {
        self.core
            .iter()
            .chain(self.extension.iter())
            .map(String::as_str)
    }

    /// Number of exported names (excludes `inlined`).
    pub fn exported_len(&self) -> usize {
        self.core.len() + self.extension.len()
    }
}

/// Classifies AST functions into an [`ExportSet`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportClassifier {
    inline_support: bool,
}

impl ExportClassifier {
    /// `inline_support` decides whether inline functions are collected
    /// into [`ExportSet::inlined`] or dropped.
    pub fn new(inline_support: bool) -> Self {
        Self { inline_support }
    }

    pub fn classify<A: AstSource>(&self, ast: &A) -> ExportSet {
        let mut set = ExportSet::default();

        for function in ast.functions() {
            let group = match self.class_of(ast, function) {
                Some(ExportClass::Core) => &mut set.core,
                Some(ExportClass::Extension) => &mut set.extension,
                Some(ExportClass::Inlined) => &mut set.inlined,
                None => continue,
            };
            group.push(function.name.clone());
        }

        set
    }

    /// The group `function` belongs to, or `None` when it is not exported.
    pub fn class_of<A: AstSource>(&self, ast: &A, function: &FunctionEntity) -> Option<ExportClass> {
        if function.is_ignored {
            return None;
        }

        let unit = function.translation_unit.as_path();
        let class = if ast.is_extension_header(unit) {
            ExportClass::Extension
        } else if ast.is_core_header(unit) {
            ExportClass::Core
        } else {
            return None;
        };

        match (function.is_inline, self.inline_support) {
            (false, _) => Some(class),
            (true, true) => Some(ExportClass::Inlined),
            (true, false) => None,
        }
    }
}
