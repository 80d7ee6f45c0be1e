// Allow unwrap in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! AST types for the wiremark wireframe language
//!
//! This crate contains the node definitions for parsed wireframe documents,
//! the shared foundation types (source locations, scalar attribute values,
//! diagnostics), and the element-kind registry that the lexer, parser,
//! layout engine and renderer all dispatch through.

pub mod diagnostic;
pub mod kind;
pub mod location;
pub mod node;
pub mod scalar;
pub mod walk;

// Re-export commonly used types
pub use diagnostic::{Diagnostic, DiagnosticKind, Severity, has_errors};
pub use kind::{
    Category, ChildGrammar, DockPosition, ElementKind, KIND_SPECS, KindSpec, keyword_spec,
    kind_spec,
};
pub use location::{SourceLocation, SourceSpan};
pub use node::{
    DataSection, DataSectionKind, Document, Element, Modifiers, Payload, StyleName, TableData,
    TreeItem,
};
pub use scalar::Scalar;
pub use walk::{walk_document, walk_elements};
