//! Semantic validation of a parsed configuration.

use std::collections::HashMap;

use handlegen_core::is_c_identifier;

use crate::{Config, Result, TemplateKind, error::SourceContext};

/// Validate the configuration after parsing.
///
/// Stops at the first problem; every error carries the source so miette
/// can point at the offending entry.
pub(crate) fn validate(config: &Config, ctx: &SourceContext) -> Result<()> {
    if config.library.trim().is_empty() {
        return Err(ctx.validation_error("'library' must not be empty"));
    }

    for name in config.configured_reserved() {
        if !is_c_identifier(name) {
            return Err(ctx.invalid_identifier_error(name.as_str(), "reserved handle", None));
        }
    }

    let mut first_seen: HashMap<(&str, TemplateKind), std::ops::Range<usize>> = HashMap::new();

    for binding in &config.handles {
        let name = binding.name();

        if !is_c_identifier(name) {
            return Err(ctx.invalid_identifier_error(name, "handle", Some(binding.name_span())));
        }

        match (binding.template(), binding.disposer()) {
            (TemplateKind::Global, None) => {
                return Err(ctx.validation_error_at(
                    format!("handle '{}' uses the global template but has no disposer", name),
                    binding.name_span(),
                ));
            }
            (TemplateKind::Global, Some(disposer)) if !is_c_identifier(disposer) => {
                return Err(ctx.invalid_identifier_error(
                    disposer,
                    "disposer",
                    binding.disposer_span(),
                ));
            }
            (kind @ (TemplateKind::Alias | TemplateKind::Context), Some(_)) => {
                let span = binding.disposer_span().unwrap_or_else(|| binding.name_span());
                return Err(ctx.validation_error_at(
                    format!("'{}' handles are never disposed; remove the disposer", kind),
                    span,
                ));
            }
            _ => {}
        }

        let key = (name, binding.template());
        if let Some(first) = first_seen.get(&key) {
            return Err(ctx.duplicate_binding_error(
                name,
                binding.template().as_str(),
                first.clone(),
                binding.name_span(),
            ));
        }
        first_seen.insert(key, binding.name_span());
    }

    for binding in &config.handles {
        if binding.template() == TemplateKind::Alias
            && !first_seen.contains_key(&(binding.name(), TemplateKind::Global))
        {
            return Err(ctx.validation_error_at(
                format!(
                    "alias of '{}' requires a global binding for the same handle",
                    binding.name()
                ),
                binding.name_span(),
            ));
        }
    }

    Ok(())
}
