//! Shared naming helpers for generated artifacts.

/// Convert a C type name to snake_case, keeping acronyms together
/// (e.g., "LLVMModuleRef" -> "llvm_module_ref")
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == '_' {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
            continue;
        }

        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary && !result.ends_with('_') {
                result.push('_');
            }
        }

        result.extend(c.to_lowercase());
    }

    result
}

/// Convert a string to PascalCase (e.g., "llvm_module_ref" -> "LlvmModuleRef")
pub fn to_pascal_case(s: &str) -> String {
    to_snake_case(s)
        .split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Check whether `s` is a valid C identifier
pub fn is_c_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("Hello"), "hello");
        assert_eq!(to_snake_case("HelloWorld"), "hello_world");
        assert_eq!(to_snake_case("hello-world"), "hello_world");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_to_snake_case_acronyms() {
        assert_eq!(to_snake_case("LLVMModuleRef"), "llvm_module_ref");
        assert_eq!(to_snake_case("LLVMOrcJITDylibRef"), "llvm_orc_jit_dylib_ref");
        assert_eq!(
            to_snake_case("LibLLVMValueCacheRef"),
            "lib_llvm_value_cache_ref"
        );
        assert_eq!(to_snake_case("LLVMPassBuilderOptionsRef"), "llvm_pass_builder_options_ref");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("LLVMModuleRef"), "LlvmModuleRef");
        assert_eq!(to_pascal_case("LibLLVMComdatIteratorRef"), "LibLlvmComdatIteratorRef");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_is_c_identifier() {
        assert!(is_c_identifier("LLVMModuleRef"));
        assert!(is_c_identifier("_private"));
        assert!(is_c_identifier("x86"));
        assert!(!is_c_identifier("9lives"));
        assert!(!is_c_identifier("has-dash"));
        assert!(!is_c_identifier(""));
    }
}
