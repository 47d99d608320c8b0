//! Capability trait between the generator and whatever produced the AST.

use std::path::Path;

use crate::{FunctionEntity, HandleEntity};

/// The only view of the parsed headers that code generation relies on.
///
/// Implementations must iterate in a stable discovery order; generated
/// output is expected to be identical between runs over the same input.
pub trait AstSource {
    /// All opaque handle typedefs, in discovery order.
    fn handles(&self) -> impl Iterator<Item = &HandleEntity>;

    /// All functions, in discovery order.
    fn functions(&self) -> impl Iterator<Item = &FunctionEntity>;

    /// Whether `unit` is one of the library-specific extension headers.
    fn is_extension_header(&self, unit: &Path) -> bool;

    /// Whether `unit` is one of the base library headers.
    fn is_core_header(&self, unit: &Path) -> bool;
}
