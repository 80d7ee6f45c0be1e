// Allow unwrap in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! # wiremark
//!
//! A wireframe description language compiled to themed SVG.
//!
//! This crate is a facade over the pipeline crates:
//!
//! ```text
//! wiremark-lexer   - indentation-aware tokenization
//!     ↓
//! wiremark-parser  - recursive descent into the typed AST
//!     ↓
//! wiremark-layout  - box resolution at a target canvas size
//!     ↓
//! wiremark-render  - themed SVG emission
//! ```
//!
//! Every stage collects diagnostics instead of failing: parsing always
//! yields a best-effort document, layout gives every element a box, and the
//! renderer degrades anything it cannot draw to a placeholder. The facade
//! entry points surface that policy directly.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wiremark::{RenderOptions, compile};
//!
//! let source = r#"
//! wireframe clean
//!     Header "My App"
//!     Button "Get started" primary
//! /wireframe
//! "#;
//! let outcome = compile(source, &RenderOptions::default());
//! std::fs::write("screen.svg", outcome.svg)?;
//! ```

// Re-export AST and foundation types
pub use wiremark_ast::{self as ast, *};

// Re-export the parser crate under an alias; its `parse` returns the raw
// `(Document, Vec<Diagnostic>)` pair, while the facade's returns ParseOutcome
pub use wiremark_parser as parser;

// Re-export layout
pub use wiremark_layout::{
    self as layout, LayoutNode, LayoutTree, Rect, compute_layout, compute_layout_padded,
};

// Re-export renderer
pub use wiremark_render::{RenderOptions, Theme, ThemeChoice, render};

pub mod pipeline;

pub use pipeline::{CompileOutcome, ParseOutcome, Validation, compile, parse, validate};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
