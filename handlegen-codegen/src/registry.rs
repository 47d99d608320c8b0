//! Handle name to template bindings.
//!
//! The registry is built once, before the AST is consulted, and is read-only
//! afterwards. Handle order is first-appearance order of the bindings; the
//! templates for one handle keep binding order.

use handlegen_config::{Config, ERROR_REF_HANDLE, TemplateKind};
use indexmap::{IndexMap, IndexSet};
use thiserror::Error;

use crate::HandleTemplate;

/// Errors raised while building a [`HandleTemplateRegistry`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("handle '{handle}' is bound to the {template} template more than once")]
    DuplicateBinding {
        handle: String,
        template: TemplateKind,
    },

    #[error("handle '{handle}' uses the global template but has no disposer")]
    MissingDisposer { handle: String },
}

/// Ordered mapping from handle type names to the templates generated for them.
#[derive(Debug, Clone, Default)]
pub struct HandleTemplateRegistry {
    map: IndexMap<String, Vec<HandleTemplate>>,
    reserved: IndexSet<String>,
}

impl HandleTemplateRegistry {
    /// Build a registry from bindings and extra reserved handle names.
    ///
    /// [`ERROR_REF_HANDLE`] is always reserved, whether or not it appears in
    /// `reserved`.
    pub fn new<I, R, S>(templates: I, reserved: R) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = HandleTemplate>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut map: IndexMap<String, Vec<HandleTemplate>> = IndexMap::new();

        for template in templates {
            let bound = map.entry(template.handle_name().to_string()).or_default();
            let kind = template.kind().template_kind();
            if bound.iter().any(|t| t.kind().template_kind() == kind) {
                return Err(RegistryError::DuplicateBinding {
                    handle: template.handle_name().to_string(),
                    template: kind,
                });
            }
            bound.push(template);
        }

        let mut set = IndexSet::new();
        set.insert(ERROR_REF_HANDLE.to_string());
        set.extend(reserved.into_iter().map(Into::into));

        Ok(Self { map, reserved: set })
    }

    /// Build from a parsed configuration.
    pub fn from_config(config: &Config) -> Result<Self, RegistryError> {
        let templates = config
            .handles
            .iter()
            .map(|binding| {
                HandleTemplate::from_binding(binding).ok_or_else(|| {
                    RegistryError::MissingDisposer {
                        handle: binding.name().to_string(),
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(templates, config.reserved_handles())
    }

    /// Templates bound to `handle_name`, in binding order. Unknown names
    /// yield an empty slice.
    pub fn lookup(&self, handle_name: &str) -> &[HandleTemplate] {
        self.map.get(handle_name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether `handle_name` is excluded from template dispatch.
    pub fn is_reserved(&self, handle_name: &str) -> bool {
        self.reserved.contains(handle_name)
    }

    pub fn reserved(&self) -> impl Iterator<Item = &str> {
        self.reserved.iter().map(String::as_str)
    }

    /// Bound handle names, in first-appearance order.
    pub fn handles(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    /// Total number of bindings across all handles.
    pub fn len(&self) -> usize {
        self.map.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::templates::HandleKind;

    #[test]
    fn test_lookup_keeps_binding_order() {
        let registry = HandleTemplateRegistry::new(
            [
                HandleTemplate::global("LLVMModuleRef", "LLVMDisposeModule"),
                HandleTemplate::context("LLVMValueRef"),
                HandleTemplate::alias("LLVMModuleRef"),
            ],
            Vec::<String>::new(),
        )
        .unwrap();

        let kinds: Vec<_> = registry
            .lookup("LLVMModuleRef")
            .iter()
            .map(|t| t.kind().template_kind())
            .collect();
        assert_eq!(kinds, vec![TemplateKind::Global, TemplateKind::Alias]);
        assert_eq!(
            registry.handles().collect::<Vec<_>>(),
            vec!["LLVMModuleRef", "LLVMValueRef"]
        );
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_lookup_unknown_is_empty() {
        let registry = HandleTemplateRegistry::default();
        assert!(registry.lookup("LLVMBarRef").is_empty());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_duplicate_binding_rejected() {
        let err = HandleTemplateRegistry::new(
            [
                HandleTemplate::context("LLVMValueRef"),
                HandleTemplate::context("LLVMValueRef"),
            ],
            Vec::<String>::new(),
        )
        .unwrap_err();

        assert_eq!(
            err,
            RegistryError::DuplicateBinding {
                handle: "LLVMValueRef".into(),
                template: TemplateKind::Context,
            }
        );
    }

    #[test]
    fn test_error_ref_always_reserved() {
        let registry =
            HandleTemplateRegistry::new(Vec::new(), ["LLVMOrcLLJITRef"]).unwrap();

        assert!(registry.is_reserved("LLVMErrorRef"));
        assert!(registry.is_reserved("LLVMOrcLLJITRef"));
        assert!(!registry.is_reserved("LLVMModuleRef"));
        assert_eq!(
            registry.reserved().collect::<Vec<_>>(),
            vec!["LLVMErrorRef", "LLVMOrcLLJITRef"]
        );
    }

    #[test]
    fn test_from_config() {
        let config = Config::from_str(
            r#"
            reserved-handles = ["LLVMOrcLLJITRef"]

            [[handle]]
            name = "LLVMContextRef"
            template = "global"
            disposer = "LLVMContextDispose"

            [[handle]]
            name = "LLVMContextRef"
            template = "alias"
            "#,
        )
        .unwrap();

        let registry = HandleTemplateRegistry::from_config(&config).unwrap();
        let bound = registry.lookup("LLVMContextRef");

        assert_eq!(bound.len(), 2);
        assert_eq!(
            bound[0].kind(),
            &HandleKind::Global {
                disposer: "LLVMContextDispose".into()
            }
        );
        assert_eq!(bound[1].kind(), &HandleKind::Alias);
        assert!(registry.is_reserved("LLVMOrcLLJITRef"));
    }
}
