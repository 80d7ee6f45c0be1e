//! The resolved layout tree.
//!
//! A [`LayoutTree`] mirrors the element tree but carries a resolved [`Rect`]
//! per node. Nodes borrow their elements instead of cloning them; `repeat`
//! expansion means several layout nodes can point at the same template
//! element, which a parallel index walk could not express.

use crate::geometry::Rect;
use wiremark_ast::Element;

/// One laid-out element with its resolved bounding box.
#[derive(Clone, Debug)]
pub struct LayoutNode<'a> {
    /// The element this box was computed for
    pub element: &'a Element,
    /// Resolved bounds in canvas coordinates
    pub rect: Rect,
    /// Laid-out children, in paint order
    pub children: Vec<LayoutNode<'a>>,
}

impl<'a> LayoutNode<'a> {
    pub(crate) fn new(element: &'a Element, rect: Rect) -> Self {
        Self {
            element,
            rect,
            children: Vec::new(),
        }
    }

    /// Move this node and every descendant by the given offset.
    pub(crate) fn translate(&mut self, dx: f64, dy: f64) {
        self.rect.x += dx;
        self.rect.y += dy;
        for child in &mut self.children {
            child.translate(dx, dy);
        }
    }

    /// Number of nodes in this subtree, the node itself included.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(LayoutNode::count).sum::<usize>()
    }
}

/// The whole laid-out document.
#[derive(Clone, Debug)]
pub struct LayoutTree<'a> {
    /// Full canvas, before document padding
    pub canvas: Rect,
    /// Top-level nodes in source order
    pub nodes: Vec<LayoutNode<'a>>,
    /// Modal and Drawer nodes, painted above everything else
    pub overlays: Vec<LayoutNode<'a>>,
}

impl LayoutTree<'_> {
    /// Total node count across flowed nodes and overlays.
    pub fn node_count(&self) -> usize {
        self.nodes.iter().map(LayoutNode::count).sum::<usize>()
            + self.overlays.iter().map(LayoutNode::count).sum::<usize>()
    }
}
