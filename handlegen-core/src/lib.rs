//! Core utilities and types for the handlegen interop generator.
//!
//! This crate provides the generated-file trait and naming helpers shared
//! by the rest of the workspace.

mod file;
mod utils;

// File operations
pub use file::{GeneratedFile, WriteResult};
// String utilities
pub use utils::{is_c_identifier, to_pascal_case, to_snake_case};
