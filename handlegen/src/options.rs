//! Inputs shared by `generate` and `check`, and their validation.

use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Result, WrapErr, bail};
use handlegen_ast::{Ast, HeaderRoots};
use handlegen_config::Config;

use crate::commands::UnwrapOrExit;

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Root of the LLVM source tree (must contain an `include` directory)
    #[arg(short = 'l', long = "llvm-root")]
    pub llvm_root: PathBuf,

    /// Root of the LibLLVM extension sources (must contain an `include` directory)
    #[arg(short = 'e', long = "extensions-root")]
    pub extensions_root: PathBuf,

    /// AST dump written by the header parser
    #[arg(long)]
    pub ast: PathBuf,

    /// Path to handlegen.toml
    #[arg(short, long, default_value = "handlegen.toml")]
    pub config: PathBuf,
}

/// Everything a run needs, loaded from validated inputs.
pub struct Inputs {
    pub config: Config,
    pub ast: Ast,
}

impl InputArgs {
    /// Check the input paths, reporting every problem at once.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();
        check_root("LLVM root", &self.llvm_root, &mut problems);
        check_root("extensions root", &self.extensions_root, &mut problems);
        report(problems)
    }

    /// Validate, then load the configuration and the AST.
    pub fn load(&self) -> Result<Inputs> {
        self.validate()?;

        let config = Config::from_file(&self.config).unwrap_or_exit();
        let roots = HeaderRoots::new(canonical(&self.llvm_root)?, canonical(&self.extensions_root)?);
        let ast = Ast::load(&self.ast, roots, &config.ignored_headers)
            .wrap_err_with(|| format!("failed to load AST dump '{}'", self.ast.display()))?;

        tracing::debug!(config = %self.config.display(), ast = %self.ast.display(), "loaded inputs");
        Ok(Inputs { config, ast })
    }
}

/// Resolve the exports path, requiring a parent directory to write into.
/// The directory itself is created on write.
pub fn exports_path(path: &Path) -> Result<PathBuf> {
    let path = absolute(path)?;
    if path.parent().is_none() || path.file_name().is_none() {
        bail!(
            "path for the exports file must have a parent directory: '{}'",
            path.display()
        );
    }
    Ok(path)
}

fn check_root(label: &str, root: &Path, problems: &mut Vec<String>) {
    if !root.is_dir() {
        problems.push(format!("{} does not exist: '{}'", label, root.display()));
    } else if !root.join("include").is_dir() {
        problems.push(format!(
            "{} does not contain an 'include' directory: '{}'",
            label,
            root.display()
        ));
    }
}

fn report(problems: Vec<String>) -> Result<()> {
    if problems.is_empty() {
        return Ok(());
    }
    bail!("invalid options:\n  {}", problems.join("\n  "))
}

/// Resolve a validated root to the form the parser records unit paths in,
/// with `.`/`..` collapsed and symlinks followed.
fn canonical(path: &Path) -> Result<PathBuf> {
    std::fs::canonicalize(path).wrap_err_with(|| format!("failed to resolve '{}'", path.display()))
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).wrap_err_with(|| format!("failed to resolve '{}'", path.display()))
}
