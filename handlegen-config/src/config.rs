//! Root configuration type and parsing.

use std::{path::Path, str::FromStr};

use serde::Deserialize;

use crate::{Error, HandleBinding, Result, error::SourceContext, validate};

/// Handle with a bespoke disposal contract that no template can express:
/// retrieving its message consumes it, and so does dropping it unread.
/// It is always reserved, whatever the configuration says.
pub const ERROR_REF_HANDLE: &str = "LLVMErrorRef";

/// Headers excluded from parsing unless the configuration overrides the list.
pub const DEFAULT_IGNORED_HEADERS: &[&str] = &["llvm-c/lto.h", "llvm-c/Remarks.h"];

/// Root configuration for handlegen.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config {
    /// Module name written to the `LIBRARY` line of the exports file.
    #[serde(default = "default_library")]
    pub library: String,

    /// Directory, relative to the output root, receiving handle wrappers.
    #[serde(default = "default_handle_output")]
    pub handle_output: String,

    /// Collect inline functions into their own export group.
    #[serde(default)]
    pub inline_exports: bool,

    /// Headers excluded from the AST before generation.
    #[serde(default = "default_ignored_headers")]
    pub ignored_headers: Vec<String>,

    /// Additional handles that must never go through template dispatch.
    #[serde(default)]
    reserved_handles: Vec<String>,

    /// Handle-to-template bindings, in declaration order.
    #[serde(default, rename = "handle")]
    pub handles: Vec<HandleBinding>,
}

fn default_library() -> String {
    "LibLLVM".to_string()
}

fn default_handle_output() -> String {
    "handles".to_string()
}

fn default_ignored_headers() -> Vec<String> {
    DEFAULT_IGNORED_HEADERS.iter().map(|h| h.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            library: default_library(),
            handle_output: default_handle_output(),
            inline_exports: false,
            ignored_headers: default_ignored_headers(),
            reserved_handles: Vec::new(),
            handles: Vec::new(),
        }
    }
}

impl Config {
    /// Parse a handlegen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_config(&content, &path.display().to_string())
    }

    /// Parse a handlegen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_config(content, filename)
    }

    /// Reserved handle names: [`ERROR_REF_HANDLE`] followed by any configured extras.
    pub fn reserved_handles(&self) -> Vec<&str> {
        let mut reserved = vec![ERROR_REF_HANDLE];
        for name in &self.reserved_handles {
            if !reserved.contains(&name.as_str()) {
                reserved.push(name.as_str());
            }
        }
        reserved
    }

    /// Raw configured reserved names, without the built-in entry.
    pub(crate) fn configured_reserved(&self) -> &[String] {
        &self.reserved_handles
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, "handlegen.toml")
    }
}

/// Parse and validate configuration content.
fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let source_ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate::validate(&config, &source_ctx)?;
    Ok(config)
}
