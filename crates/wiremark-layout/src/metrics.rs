//! Named layout metrics.
//!
//! The renderer reads the row and strip metrics too, so table rows and tab
//! strips are drawn exactly where the layout pass accounted for them.

/// Gap between siblings in a flow, unless `gap=` overrides it.
pub const GAP: f64 = 12.0;
/// Inset between the canvas edge and top-level content.
pub const DOC_PADDING: f64 = 16.0;
/// Inset between a framed element's border and its children.
pub const FRAME_PADDING: f64 = 12.0;
/// Vertical space reserved for an element's title text.
pub const TITLE_STRIP: f64 = 24.0;
/// Estimated advance width per character for text-sized controls.
pub const CHAR_WIDTH: f64 = 8.0;
/// Horizontal text inset inside a text-sized control, per side.
pub const TEXT_INSET: f64 = 14.0;
/// A table body row.
pub const ROW_HEIGHT: f64 = 26.0;
/// A table header row.
pub const HEADER_ROW_HEIGHT: f64 = 30.0;
/// One tree or list item line.
pub const ITEM_HEIGHT: f64 = 22.0;
/// Header strip left when an element is `collapsed`.
pub const COLLAPSED_HEIGHT: f64 = 32.0;
/// Tab button row inside a Tabs component, including its gap.
pub const TAB_STRIP: f64 = 36.0;
/// Height of a childless container (something to draw, nothing to measure).
pub const EMPTY_CONTAINER_HEIGHT: f64 = 40.0;
/// Dock edge consumed by a top/bottom child with no usable height.
pub const DOCK_EDGE_FALLBACK: f64 = 64.0;
/// Dock edge consumed by a left/right child with no usable width.
pub const DOCK_SIDE_FALLBACK: f64 = 220.0;
/// Fraction of the canvas a Modal covers per axis.
pub const MODAL_FRACTION: f64 = 0.6;
