// Allow unwrap in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Layout engine for wiremark documents
//!
//! [`compute_layout`] turns a parsed [`Document`](wiremark_ast::Document)
//! into a [`LayoutTree`] of absolutely positioned rects at a given canvas
//! size. Layout never fails: every element gets a box, unknown attribute
//! values fall back to defaults, and overflow simply extends past the
//! parent (the SVG viewBox clips at the canvas edge).
//!
//! The [`metrics`] module exposes the spacing constants the renderer needs
//! to draw rows, strips and padding the same way layout accounted for them.

pub mod metrics;

mod geometry;
mod place;
mod size;
mod tree;

pub use geometry::Rect;
pub use place::{compute_layout, compute_layout_padded};
pub use tree::{LayoutNode, LayoutTree};
