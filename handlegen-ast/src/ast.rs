//! In-memory AST built from a parser dump.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use crate::{AstDump, AstError, AstSource, FunctionEntity, HandleEntity, UnitDump};

/// Include directories used to decide where a translation unit came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRoots {
    /// `<llvm-root>/include`
    pub core: PathBuf,
    /// `<extensions-root>/include`
    pub extension: PathBuf,
}

impl HeaderRoots {
    /// Build roots from the two source trees; both are expected to hold an
    /// `include` directory.
    pub fn new(llvm_root: impl AsRef<Path>, extensions_root: impl AsRef<Path>) -> Self {
        Self {
            core: llvm_root.as_ref().join("include"),
            extension: extensions_root.as_ref().join("include"),
        }
    }

    /// Path of `unit` relative to the include root that contains it.
    ///
    /// The extension root is tried first so a nested extension tree is
    /// never mistaken for core headers.
    pub fn relative<'a>(&self, unit: &'a Path) -> &'a Path {
        unit.strip_prefix(&self.extension)
            .or_else(|_| unit.strip_prefix(&self.core))
            .unwrap_or(unit)
    }
}

/// Immutable AST assembled from an [`AstDump`].
#[derive(Debug, Clone)]
pub struct Ast {
    roots: HeaderRoots,
    handles: Vec<HandleEntity>,
    functions: Vec<FunctionEntity>,
}

impl Ast {
    /// Assemble an AST, dropping every unit listed in `ignored_headers`.
    ///
    /// Ignored headers are matched against the unit path relative to its
    /// include root (`llvm-c/lto.h`), with either path separator.
    /// A handle declared in several units keeps its first declaration.
    pub fn new(dump: AstDump, roots: HeaderRoots, ignored_headers: &[String]) -> Self {
        let ignored: HashSet<String> = ignored_headers
            .iter()
            .map(|h| normalize_separators(h))
            .collect();

        let mut seen = HashSet::new();
        let mut handles = Vec::new();
        let mut functions = Vec::new();

        for unit in dump.units {
            let relative = roots.relative(&unit.path).to_path_buf();
            if ignored.contains(&normalize_separators(&relative.to_string_lossy())) {
                continue;
            }

            let UnitDump {
                path,
                handles: unit_handles,
                functions: unit_functions,
            } = unit;

            for handle in unit_handles {
                if seen.insert(handle.name.clone()) {
                    handles.push(HandleEntity {
                        name: handle.name,
                        file: relative.clone(),
                        line: handle.line,
                    });
                }
            }

            functions.extend(unit_functions.into_iter().map(|f| FunctionEntity {
                name: f.name,
                translation_unit: path.clone(),
                is_inline: f.inline,
                is_ignored: f.ignored,
            }));
        }

        Self {
            roots,
            handles,
            functions,
        }
    }

    /// Load an AST dump from a JSON file.
    pub fn load(
        path: impl AsRef<Path>,
        roots: HeaderRoots,
        ignored_headers: &[String],
    ) -> Result<Self, AstError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| AstError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dump: AstDump = serde_json::from_str(&content).map_err(|source| AstError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(dump, roots, ignored_headers))
    }

    /// The include roots this AST was classified against.
    pub fn roots(&self) -> &HeaderRoots {
        &self.roots
    }
}

impl AstSource for Ast {
    fn handles(&self) -> impl Iterator<Item = &HandleEntity> {
        self.handles.iter()
    }

    fn functions(&self) -> impl Iterator<Item = &FunctionEntity> {
        self.functions.iter()
    }

    fn is_extension_header(&self, unit: &Path) -> bool {
        unit.starts_with(&self.roots.extension)
    }

    fn is_core_header(&self, unit: &Path) -> bool {
        unit.starts_with(&self.roots.core)
    }
}

fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}
