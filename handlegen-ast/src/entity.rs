//! Entities discovered in the parsed headers.

use std::{fmt, path::PathBuf};

/// An opaque pointer typedef (e.g. `typedef struct LLVMOpaqueModule* LLVMModuleRef`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandleEntity {
    /// Typedef name, unique within one AST.
    pub name: String,
    /// Declaring header, relative to its include root.
    pub file: PathBuf,
    /// Line of the typedef in `file`.
    pub line: u32,
}

impl HandleEntity {
    /// Human-readable provenance (`llvm-c/Types.h@42`).
    pub fn location(&self) -> Location<'_> {
        Location(self)
    }
}

/// Display adapter for a handle's declaring file and line.
pub struct Location<'a>(&'a HandleEntity);

impl fmt::Display for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Forward slashes keep diagnostics identical across platforms.
        let file = self.0.file.to_string_lossy().replace('\\', "/");
        write!(f, "{}@{}", file, self.0.line)
    }
}

/// A callable symbol declared in a translation unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionEntity {
    /// Symbol name.
    pub name: String,
    /// Path of the owning translation unit, as reported by the parser.
    pub translation_unit: PathBuf,
    /// Declared `inline`; such functions have no exported symbol.
    pub is_inline: bool,
    /// Marked ignored by the parser's passes.
    pub is_ignored: bool,
}
