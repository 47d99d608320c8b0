use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the final file path, resolving relative outputs against `base`
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk unless it already holds the rendered content,
    /// so timestamps of unchanged outputs stay stable for downstream builds
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        let content = self.render();

        if is_unchanged(&path, &content) {
            return Ok(WriteResult::Unchanged);
        }
        write_file(&path, &content)?;
        Ok(WriteResult::Written)
    }
}

fn is_unchanged(path: &Path, content: &str) -> bool {
    std::fs::read_to_string(path).is_ok_and(|existing| existing == content)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the rendered content and was left untouched
    Unchanged,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Fixed {
        path: PathBuf,
        content: &'static str,
    }

    impl Fixed {
        fn new(path: impl Into<PathBuf>, content: &'static str) -> Self {
            Self {
                path: path.into(),
                content,
            }
        }
    }

    impl GeneratedFile for Fixed {
        fn path(&self, base: &Path) -> PathBuf {
            base.join(&self.path)
        }


        fn render(&self) -> String {
            self.content.to_string()
        }
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_file_write_creates_new() {
        let temp = TempDir::new().unwrap();

        let file = Fixed::new("new.txt", "new content");
        let result = file.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("new.txt")).unwrap(),
            "new content"
        );
    }

    #[test]
    fn test_file_write_skips_identical() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("same.txt");
        fs::write(&path, "same").unwrap();

        let result = Fixed::new("same.txt", "same").write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Unchanged);
    }

    #[test]
    fn test_file_write_replaces_different() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("stale.txt");
        fs::write(&path, "original").unwrap();

        let result = Fixed::new("stale.txt", "updated").write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_absolute_path_ignores_base() {
        let temp = TempDir::new().unwrap();
        let absolute = temp.path().join("abs.txt");

        let file = Fixed::new(&absolute, "x");

        assert_eq!(file.path(Path::new("/elsewhere")), absolute);
    }
}
