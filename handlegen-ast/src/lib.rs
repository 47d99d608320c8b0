//! Header AST model for the handlegen interop generator.
//!
//! Header parsing happens outside this workspace. The external parser
//! writes a JSON dump of every translation unit it visited; this crate
//! loads that dump into an immutable [`Ast`] and exposes it to the
//! generator through the narrow [`AstSource`] capability trait.
//!
//! # Architecture
//!
//! ```text
//! headers → external parser → ast.json → Ast (this crate) → AstSource → codegen
//! ```
//!
//! Code generation only ever sees [`AstSource`], so tests can hand it
//! synthetic in-memory trees built from [`AstDump`] and [`UnitDump`].

mod ast;
mod dump;
mod entity;
mod error;
mod source;

pub use ast::{Ast, HeaderRoots};
pub use dump::{AstDump, FunctionDump, HandleDump, UnitDump};
pub use entity::{FunctionEntity, HandleEntity, Location};
pub use error::AstError;
pub use source::AstSource;
