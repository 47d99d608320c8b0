//! Rendering descriptors to disk.
//!
//! Unchanged outputs are left untouched so that downstream builds keyed on
//! timestamps don't rebuild every wrapper on each run.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use handlegen_core::{GeneratedFile, WriteResult};

use crate::GenerationDescriptor;

/// Writes descriptors below an output root.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    root: PathBuf,
}

impl OutputWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Render and write one descriptor. Invalid descriptors are skipped and
    /// yield `None`.
    pub fn write(&self, descriptor: &GenerationDescriptor<'_>) -> Result<Option<WriteResult>> {
        if !descriptor.valid {
            return Ok(None);
        }

        let result = descriptor
            .write(&self.root)
            .wrap_err_with(|| format!("failed to generate {}", descriptor.template.describe()))?;
        Ok(Some(result))
    }

    /// Write every descriptor, stopping at the first I/O failure.
    pub fn write_all<'a>(
        &self,
        descriptors: impl IntoIterator<Item = GenerationDescriptor<'a>>,
    ) -> Result<WriteStats> {
        let mut stats = WriteStats::default();

        for descriptor in descriptors {
            let path = descriptor.resolve(&self.root);
            match self.write(&descriptor)? {
                Some(WriteResult::Written) => stats.written.push(path),
                Some(WriteResult::Unchanged) => stats.unchanged.push(path),
                None => stats.skipped += 1,
            }
        }

        Ok(stats)
    }

    /// What `write` would produce, without touching the filesystem.
    pub fn preview(&self, descriptor: &GenerationDescriptor<'_>) -> Option<PreviewFile> {
        descriptor.valid.then(|| PreviewFile {
            path: descriptor.resolve(&self.root),
            content: descriptor.render(),
        })
    }
}

/// A file that would be generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    pub path: PathBuf,
    pub content: String,
}

/// Statistics from a write operation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WriteStats {
    /// Files whose content was (re)written.
    pub written: Vec<PathBuf>,
    /// Files that already held the rendered content.
    pub unchanged: Vec<PathBuf>,
    /// Invalid descriptors that were not rendered.
    pub skipped: usize,
}

impl WriteStats {
    /// Total number of files processed.
    pub fn total(&self) -> usize {
        self.written.len() + self.unchanged.len()
    }
}
