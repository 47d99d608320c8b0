//! Core operations.
//!
//! This module contains the business logic for handlegen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;

pub use check::check;
pub use generate::{GenerateOptions, generate};

use eyre::{Result, WrapErr};
use handlegen_codegen::{DispatchOptions, HandleTemplateRegistry, TemplateDispatcher};
use handlegen_config::Config;

/// Build the dispatcher for a configuration.
fn dispatcher(config: &Config, options: DispatchOptions) -> Result<TemplateDispatcher> {
    let registry =
        HandleTemplateRegistry::from_config(config).wrap_err("invalid handle bindings")?;
    tracing::debug!(
        bindings = registry.len(),
        reserved = registry.reserved().count(),
        "built handle template registry"
    );
    Ok(TemplateDispatcher::new(registry, options))
}
