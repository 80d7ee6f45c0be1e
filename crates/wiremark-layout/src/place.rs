//! Placement algorithms.
//!
//! [`compute_layout`] threads a top-down available rect through the element
//! tree and folds children's boxes back into their parents:
//!
//! - Vertical/Horizontal: sequential main-axis placement with a gap;
//!   `justify=` on a horizontal run redistributes leftover space by shifting
//!   already-placed children.
//! - Grid: fixed column count, equal column widths, row height from the
//!   tallest child in the row.
//! - Dock: edge children shrink a running rect in source order; undocked
//!   children fill what remains.
//! - Canvas: explicit `x`/`y` offsets, siblings never interact.
//! - Tabs: a button strip with the active tab's children underneath.
//!
//! `repeat` and `if` elements are expanded away before placement. Modal and
//! Drawer children leave the flow entirely and position against the canvas.

use crate::geometry::Rect;
use crate::metrics::{
    COLLAPSED_HEIGHT, DOC_PADDING, DOCK_EDGE_FALLBACK, DOCK_SIDE_FALLBACK, EMPTY_CONTAINER_HEIGHT,
    FRAME_PADDING, GAP, MODAL_FRACTION, TAB_STRIP, TITLE_STRIP,
};
use crate::size::{HeightRule, explicit_height, explicit_width, height_rule, natural_width};
use crate::tree::{LayoutNode, LayoutTree};
use wiremark_ast::{Category, DockPosition, Document, Element, ElementKind, kind_spec};

/// Resolve a layout tree for the document at the given canvas size.
///
/// The document's top-level children flow vertically unless one of them
/// docks to an edge, in which case the whole canvas behaves like a Dock
/// container.
pub fn compute_layout<'a>(document: &'a Document, width: f64, height: f64) -> LayoutTree<'a> {
    compute_layout_padded(document, width, height, DOC_PADDING)
}

/// [`compute_layout`] with a caller-chosen document padding.
pub fn compute_layout_padded<'a>(
    document: &'a Document,
    width: f64,
    height: f64,
    padding: f64,
) -> LayoutTree<'a> {
    let canvas = Rect::new(0.0, 0.0, width.max(0.0), height.max(0.0));
    let content = canvas.inset(padding.max(0.0));
    let mut placer = Placer {
        canvas,
        overlays: Vec::new(),
    };

    let children = expand(&document.children);
    let nodes = if children.iter().any(|c| is_edge_docked(c)) {
        placer.dock_flow(&children, content).0
    } else {
        placer.vertical_flow(None, &children, content).0
    };

    let tree = LayoutTree {
        canvas,
        nodes,
        overlays: placer.overlays,
    };
    tracing::debug!(nodes = tree.node_count(), width, height, "layout resolved");
    tree
}

fn is_edge_docked(element: &Element) -> bool {
    !element.kind.is_overlay()
        && matches!(
            element.dock(),
            Some(
                DockPosition::Top | DockPosition::Bottom | DockPosition::Left | DockPosition::Right
            )
        )
}

// ====== Expansion ======

/// Flatten `repeat` and `if` elements into the children they stand for.
fn expand(children: &[Element]) -> Vec<&Element> {
    let mut out = Vec::with_capacity(children.len());
    expand_into(children, &mut out);
    out
}

fn expand_into<'a>(children: &'a [Element], out: &mut Vec<&'a Element>) {
    for child in children {
        match child.kind {
            ElementKind::Repeat => {
                let count = child.number_attr("count").unwrap_or(1.0).clamp(0.0, 100.0) as usize;
                for _ in 0..count {
                    expand_into(&child.children, out);
                }
            }
            // A wireframe shows one chosen state, so a condition's children
            // always appear
            ElementKind::Conditional => expand_into(&child.children, out),
            _ => out.push(child),
        }
    }
}

// ====== Per-kind dispatch ======

/// Which placement algorithm a kind's children go through.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Flow {
    Vertical,
    Horizontal,
    Grid,
    Dock,
    Canvas,
    Tabs,
}

fn flow(kind: ElementKind) -> Flow {
    match kind {
        ElementKind::Horizontal
        | ElementKind::Header
        | ElementKind::Footer
        | ElementKind::Toolbar
        | ElementKind::StatusBar
        | ElementKind::Navbar
        | ElementKind::ButtonGroup => Flow::Horizontal,
        ElementKind::Grid => Flow::Grid,
        ElementKind::Dock => Flow::Dock,
        ElementKind::Canvas => Flow::Canvas,
        ElementKind::Tabs => Flow::Tabs,
        // Scroll scrolls at render time; its layout is a vertical flow
        _ => Flow::Vertical,
    }
}

/// Gap between siblings inside `parent`.
fn flow_gap(parent: Option<&Element>) -> f64 {
    let Some(element) = parent else { return GAP };
    let default = match element.kind {
        // Grouped buttons render attached
        ElementKind::ButtonGroup => 0.0,
        _ => GAP,
    };
    element.number_attr("gap").unwrap_or(default).max(0.0)
}

/// Cross-axis stretch in a vertical flow or grid cell: the registry flag or
/// an explicit `align=stretch`, unless the element fixed its own width.
fn stretch_width(element: &Element, inner_width: f64) -> Option<f64> {
    if element.attr("w").is_some() {
        return None;
    }
    let spec = kind_spec(element.kind);
    if spec.stretch || element.string_attr("align") == Some("stretch") {
        Some(inner_width)
    } else {
        None
    }
}

/// Cross-axis stretch in a horizontal flow.
fn stretch_height(element: &Element, inner_height: f64) -> Option<f64> {
    if element.attr("h").is_some() {
        return None;
    }
    let spec = kind_spec(element.kind);
    if spec.stretch || element.string_attr("align") == Some("stretch") {
        Some(inner_height)
    } else {
        None
    }
}

/// True when the element has no width of its own in a horizontal run and
/// should take a share of the leftover.
fn fills_main_axis(element: &Element) -> bool {
    if element.attr("w").is_some() || element.kind == ElementKind::Divider {
        return false;
    }
    let spec = kind_spec(element.kind);
    let (default_w, _) = spec.default_size;
    default_w <= 0.0 && !spec.text_sized
}

// ====== Placement ======

struct Placer<'a> {
    canvas: Rect,
    overlays: Vec<LayoutNode<'a>>,
}

impl<'a> Placer<'a> {
    /// Lay out one element in the given available rect. Forced dimensions
    /// override the element's own resolution (dock cells, cross-axis
    /// stretch, overlay boxes).
    fn place(
        &mut self,
        element: &'a Element,
        avail: Rect,
        forced_width: Option<f64>,
        forced_height: Option<f64>,
    ) -> LayoutNode<'a> {
        let spec = kind_spec(element.kind);
        let width = forced_width.unwrap_or_else(|| natural_width(element, avail.width));

        // A collapsed element is just its header strip
        if element.modifiers.collapsed {
            let height = forced_height.unwrap_or(COLLAPSED_HEIGHT);
            return LayoutNode::new(element, Rect::new(avail.x, avail.y, width, height));
        }

        let rule = match forced_height {
            Some(h) => HeightRule::Fixed(h),
            None => height_rule(element, avail.height),
        };

        let framed = matches!(spec.category, Category::Section | Category::Component);
        let pad = match element.kind {
            ElementKind::ButtonGroup | ElementKind::Breadcrumb | ElementKind::Pagination => 0.0,
            _ if framed => FRAME_PADDING,
            _ => 0.0,
        };
        let title = if framed && element.text.is_some() && !element.children.is_empty() {
            TITLE_STRIP
        } else {
            0.0
        };

        let offered_h = match rule {
            HeightRule::Fixed(h) => h,
            _ => avail.height,
        };
        let inner = Rect::new(
            avail.x + pad,
            avail.y + pad + title,
            (width - 2.0 * pad).max(0.0),
            (offered_h - 2.0 * pad - title).max(0.0),
        );

        let (children, content_h) = if element.children.is_empty() {
            (Vec::new(), 0.0)
        } else {
            let expanded = expand(&element.children);
            match flow(element.kind) {
                Flow::Vertical => self.vertical_flow(Some(element), &expanded, inner),
                Flow::Horizontal => self.horizontal_flow(Some(element), &expanded, inner),
                Flow::Grid => self.grid_flow(element, &expanded, inner),
                Flow::Dock => self.dock_flow(&expanded, inner),
                Flow::Canvas => self.canvas_flow(&expanded, inner),
                Flow::Tabs => self.tabs_flow(element, &expanded, inner),
            }
        };

        let height = match rule {
            HeightRule::Fixed(h) => h,
            HeightRule::AtLeast(min) => min.max(content_h + 2.0 * pad + title),
            HeightRule::Content => {
                if children.is_empty() {
                    EMPTY_CONTAINER_HEIGHT
                } else {
                    content_h + 2.0 * pad + title
                }
            }
        };

        let mut node = LayoutNode::new(element, Rect::new(avail.x, avail.y, width, height));
        node.children = children;
        node
    }

    /// Stack children top to bottom. Returns the nodes and the content
    /// height.
    fn vertical_flow(
        &mut self,
        parent: Option<&'a Element>,
        children: &[&'a Element],
        inner: Rect,
    ) -> (Vec<LayoutNode<'a>>, f64) {
        let gap = flow_gap(parent);
        let mut nodes = Vec::with_capacity(children.len());
        let mut cursor = inner.y;
        for child in children {
            if child.kind.is_overlay() {
                self.place_overlay(child);
                continue;
            }
            let remaining = (inner.bottom() - cursor).max(0.0);
            let ctx = Rect::new(inner.x, cursor, inner.width, remaining);
            let forced_w = stretch_width(child, inner.width);
            let mut node = self.place(child, ctx, forced_w, None);
            match child.string_attr("align") {
                Some("center") => node.translate((inner.width - node.rect.width) / 2.0, 0.0),
                Some("end") => node.translate(inner.width - node.rect.width, 0.0),
                _ => {}
            }
            cursor += node.rect.height + gap;
            nodes.push(node);
        }
        let content_h = if nodes.is_empty() {
            0.0
        } else {
            cursor - gap - inner.y
        };
        (nodes, content_h)
    }

    /// Place children left to right, then let `justify=` on the parent
    /// redistribute whatever width is left. Unsized containers split the
    /// leftover after fixed-width siblings are accounted for.
    fn horizontal_flow(
        &mut self,
        parent: Option<&'a Element>,
        children: &[&'a Element],
        inner: Rect,
    ) -> (Vec<LayoutNode<'a>>, f64) {
        let gap = flow_gap(parent);
        let flowing: Vec<&&'a Element> =
            children.iter().filter(|c| !c.kind.is_overlay()).collect();

        let mut fixed_total = 0.0;
        let mut fill_count = 0usize;
        for child in &flowing {
            if fills_main_axis(child) {
                fill_count += 1;
            } else if child.kind == ElementKind::Divider {
                fixed_total += kind_spec(ElementKind::Divider).default_size.1;
            } else {
                fixed_total += natural_width(child, inner.width);
            }
        }
        let gaps = gap * (flowing.len().saturating_sub(1)) as f64;
        let fill_share = if fill_count > 0 {
            ((inner.width - fixed_total - gaps) / fill_count as f64).max(0.0)
        } else {
            0.0
        };

        let mut nodes = Vec::with_capacity(children.len());
        let mut cursor = inner.x;
        let mut content_h: f64 = 0.0;
        for child in children {
            if child.kind.is_overlay() {
                self.place_overlay(child);
                continue;
            }
            let remaining = (inner.right() - cursor).max(0.0);
            let ctx = Rect::new(cursor, inner.y, remaining, inner.height);
            let (forced_w, forced_h) = if child.kind == ElementKind::Divider {
                // A divider in a horizontal run is a thin vertical rule
                (
                    Some(kind_spec(ElementKind::Divider).default_size.1),
                    Some(inner.height),
                )
            } else if fills_main_axis(child) {
                (Some(fill_share), stretch_height(child, inner.height))
            } else {
                (None, stretch_height(child, inner.height))
            };
            let mut node = self.place(child, ctx, forced_w, forced_h);
            match child.string_attr("align") {
                Some("center") => node.translate(0.0, (inner.height - node.rect.height) / 2.0),
                Some("end") => node.translate(0.0, inner.height - node.rect.height),
                _ => {}
            }
            cursor += node.rect.width + gap;
            content_h = content_h.max(node.rect.height);
            nodes.push(node);
        }
        let content_w = if nodes.is_empty() {
            0.0
        } else {
            cursor - gap - inner.x
        };
        if let Some(parent) = parent {
            apply_justify(parent, &mut nodes, inner.width - content_w);
        }
        (nodes, content_h)
    }

    /// Fixed column count, equal column widths, wrap after the last column;
    /// each row is as tall as its tallest child.
    fn grid_flow(
        &mut self,
        parent: &'a Element,
        children: &[&'a Element],
        inner: Rect,
    ) -> (Vec<LayoutNode<'a>>, f64) {
        let gap = flow_gap(Some(parent));
        let cols = parent
            .number_attr("cols")
            .map(|c| (c.floor() as usize).max(1))
            .unwrap_or(2);
        let col_w = ((inner.width - gap * (cols as f64 - 1.0)) / cols as f64).max(0.0);

        let mut nodes = Vec::with_capacity(children.len());
        let mut row_y = inner.y;
        let mut row_h: f64 = 0.0;
        let mut col = 0usize;
        for child in children {
            if child.kind.is_overlay() {
                self.place_overlay(child);
                continue;
            }
            let x = inner.x + col as f64 * (col_w + gap);
            let remaining = (inner.bottom() - row_y).max(0.0);
            let ctx = Rect::new(x, row_y, col_w, remaining);
            let forced_w = stretch_width(child, col_w);
            let node = self.place(child, ctx, forced_w, None);
            row_h = row_h.max(node.rect.height);
            nodes.push(node);
            col += 1;
            if col == cols {
                col = 0;
                row_y += row_h + gap;
                row_h = 0.0;
            }
        }
        if col > 0 {
            row_y += row_h + gap;
        }
        let content_h = if nodes.is_empty() {
            0.0
        } else {
            row_y - gap - inner.y
        };
        (nodes, content_h)
    }

    /// Shrink the inner rect edge by edge in child order; undocked children
    /// fill whatever remains.
    fn dock_flow(&mut self, children: &[&'a Element], inner: Rect) -> (Vec<LayoutNode<'a>>, f64) {
        let mut rect = inner;
        let mut cells: Vec<Option<Rect>> = vec![None; children.len()];

        for (i, child) in children.iter().enumerate() {
            if child.kind.is_overlay() {
                continue;
            }
            match child.dock() {
                Some(DockPosition::Top) => {
                    let h = dock_height(child, rect.height);
                    cells[i] = Some(Rect::new(rect.x, rect.y, rect.width, h));
                    rect.y += h;
                    rect.height = (rect.height - h).max(0.0);
                }
                Some(DockPosition::Bottom) => {
                    let h = dock_height(child, rect.height);
                    cells[i] = Some(Rect::new(rect.x, rect.bottom() - h, rect.width, h));
                    rect.height = (rect.height - h).max(0.0);
                }
                Some(DockPosition::Left) => {
                    let w = dock_width(child, rect.width);
                    cells[i] = Some(Rect::new(rect.x, rect.y, w, rect.height));
                    rect.x += w;
                    rect.width = (rect.width - w).max(0.0);
                }
                Some(DockPosition::Right) => {
                    let w = dock_width(child, rect.width);
                    cells[i] = Some(Rect::new(rect.right() - w, rect.y, w, rect.height));
                    rect.width = (rect.width - w).max(0.0);
                }
                Some(DockPosition::Fill) | None => {}
            }
        }

        let mut nodes = Vec::with_capacity(children.len());
        for (i, child) in children.iter().enumerate() {
            if child.kind.is_overlay() {
                self.place_overlay(child);
                continue;
            }
            let cell = cells[i].unwrap_or(rect);
            let node = self.place(child, cell, Some(cell.width), Some(cell.height));
            nodes.push(node);
        }
        (nodes, inner.height)
    }

    /// Children at explicit offsets; siblings never interact.
    fn canvas_flow(
        &mut self,
        children: &[&'a Element],
        inner: Rect,
    ) -> (Vec<LayoutNode<'a>>, f64) {
        let mut nodes = Vec::with_capacity(children.len());
        let mut extent: f64 = 0.0;
        for child in children {
            if child.kind.is_overlay() {
                self.place_overlay(child);
                continue;
            }
            let dx = child.number_attr("x").unwrap_or(0.0);
            let dy = child.number_attr("y").unwrap_or(0.0);
            let ctx = Rect::new(
                inner.x + dx,
                inner.y + dy,
                (inner.width - dx).max(0.0),
                (inner.height - dy).max(0.0),
            );
            let node = self.place(child, ctx, None, None);
            extent = extent.max(node.rect.bottom() - inner.y);
            nodes.push(node);
        }
        (nodes, extent)
    }

    /// Tab buttons in a strip across the top; the active (or first) tab's
    /// children fill the area underneath. Inactive tabs keep their buttons
    /// but lay out no content.
    fn tabs_flow(
        &mut self,
        parent: &'a Element,
        children: &[&'a Element],
        inner: Rect,
    ) -> (Vec<LayoutNode<'a>>, f64) {
        let gap = flow_gap(Some(parent));
        let active = children
            .iter()
            .position(|c| {
                c.kind == ElementKind::Tab && (c.modifiers.active || c.modifiers.selected)
            })
            .or_else(|| children.iter().position(|c| c.kind == ElementKind::Tab));

        let content = Rect::new(
            inner.x,
            inner.y + TAB_STRIP,
            inner.width,
            (inner.height - TAB_STRIP).max(0.0),
        );

        let mut nodes = Vec::with_capacity(children.len());
        let mut strip_x = inner.x;
        let mut content_h = TAB_STRIP;
        for (i, child) in children.iter().enumerate() {
            if child.kind.is_overlay() {
                self.place_overlay(child);
                continue;
            }
            if child.kind == ElementKind::Tab {
                let w = natural_width(child, inner.width);
                let h = explicit_height(child, TAB_STRIP)
                    .unwrap_or(kind_spec(ElementKind::Tab).default_size.1);
                let mut node = LayoutNode::new(child, Rect::new(strip_x, inner.y, w, h));
                if Some(i) == active && !child.children.is_empty() {
                    let expanded = expand(&child.children);
                    let (kids, kids_h) = self.vertical_flow(Some(child), &expanded, content);
                    node.children = kids;
                    content_h = content_h.max(TAB_STRIP + kids_h);
                }
                strip_x += w + gap;
                nodes.push(node);
            } else {
                // Non-tab children flow in the content area
                let node = self.place(child, content, None, None);
                content_h = content_h.max(TAB_STRIP + node.rect.height);
                nodes.push(node);
            }
        }
        (nodes, content_h)
    }

    /// Modal and Drawer position against the canvas, not their parent, and
    /// paint above the flowed tree.
    fn place_overlay(&mut self, element: &'a Element) {
        let canvas = self.canvas;
        let rect = match element.kind {
            ElementKind::Modal => {
                let w = explicit_width(element, canvas.width)
                    .unwrap_or(canvas.width * MODAL_FRACTION);
                let h = explicit_height(element, canvas.height)
                    .unwrap_or(canvas.height * MODAL_FRACTION);
                Rect::new(
                    canvas.x + (canvas.width - w) / 2.0,
                    canvas.y + (canvas.height - h) / 2.0,
                    w,
                    h,
                )
            }
            _ => {
                // Drawer: right edge, full height
                let w = natural_width(element, canvas.width);
                Rect::new(canvas.right() - w, canvas.y, w, canvas.height)
            }
        };
        let node = self.place(element, rect, Some(rect.width), Some(rect.height));
        self.overlays.push(node);
    }
}

/// Redistribute leftover main-axis space by shifting already-placed
/// children. Overflow (negative leftover) clips silently.
fn apply_justify(parent: &Element, nodes: &mut [LayoutNode<'_>], leftover: f64) {
    let Some(mode) = parent.string_attr("justify") else {
        return;
    };
    if leftover <= 0.0 || nodes.is_empty() {
        return;
    }
    let n = nodes.len() as f64;
    match mode {
        "end" => {
            for node in nodes.iter_mut() {
                node.translate(leftover, 0.0);
            }
        }
        "center" => {
            for node in nodes.iter_mut() {
                node.translate(leftover / 2.0, 0.0);
            }
        }
        "between" => {
            if nodes.len() > 1 {
                let step = leftover / (n - 1.0);
                for (i, node) in nodes.iter_mut().enumerate() {
                    node.translate(step * i as f64, 0.0);
                }
            }
        }
        "around" => {
            let step = leftover / n;
            for (i, node) in nodes.iter_mut().enumerate() {
                node.translate(step * (i as f64 + 0.5), 0.0);
            }
        }
        // The parser already warned about anything else
        _ => {}
    }
}

fn dock_height(element: &Element, avail: f64) -> f64 {
    let h = match explicit_height(element, avail) {
        Some(h) => h,
        None => {
            let (_, dh) = kind_spec(element.kind).default_size;
            if dh > 0.0 { dh } else { DOCK_EDGE_FALLBACK }
        }
    };
    h.min(avail).max(0.0)
}

fn dock_width(element: &Element, avail: f64) -> f64 {
    let w = match explicit_width(element, avail) {
        Some(w) => w,
        None => {
            let (dw, _) = kind_spec(element.kind).default_size;
            if dw > 0.0 { dw } else { DOCK_SIDE_FALLBACK }
        }
    };
    w.min(avail).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremark_parser::parse;

    /// Parse a source that must produce no diagnostics.
    fn parse_clean(source: &str) -> wiremark_ast::Document {
        let (document, diagnostics) = parse(source);
        assert!(
            diagnostics.is_empty(),
            "unexpected diagnostics: {diagnostics:?}"
        );
        document
    }

    #[test]
    fn empty_document_lays_out_nothing() {
        let document = parse_clean("");
        let tree = compute_layout(&document, 800.0, 600.0);
        assert!(tree.nodes.is_empty());
        assert_eq!(tree.canvas.width, 800.0);
    }

    #[test]
    fn vertical_children_advance_by_height_plus_gap() {
        let source = "Vertical\n    Button \"A\"\n    Button \"B\"\n    Button \"C\"";
        let document = parse_clean(source);
        let tree = compute_layout(&document, 800.0, 600.0);

        let children = &tree.nodes[0].children;
        assert_eq!(children.len(), 3);
        for pair in children.windows(2) {
            assert_eq!(
                pair[1].rect.y,
                pair[0].rect.y + pair[0].rect.height + GAP,
                "vertical spacing"
            );
            assert_eq!(pair[1].rect.x, pair[0].rect.x);
        }
    }

    #[test]
    fn horizontal_children_advance_by_width_plus_gap() {
        let source = "Horizontal\n    Button \"A\"\n    Button \"B\"";
        let document = parse_clean(source);
        let tree = compute_layout(&document, 800.0, 600.0);

        let children = &tree.nodes[0].children;
        assert_eq!(children.len(), 2);
        assert_eq!(
            children[1].rect.x,
            children[0].rect.x + children[0].rect.width + GAP
        );
        assert_eq!(children[1].rect.y, children[0].rect.y);
    }

    #[test]
    fn dock_shrinks_top_then_left() {
        let source = "Dock\n    Header \"Top\"\n    Sidebar\n    Content";
        let document = parse_clean(source);
        let tree = compute_layout(&document, 800.0, 600.0);

        let dock = &tree.nodes[0];
        let header = &dock.children[0];
        let sidebar = &dock.children[1];
        let content = &dock.children[2];

        assert_eq!(header.rect.height, 64.0);
        assert_eq!(header.rect.width, dock.rect.width);
        assert_eq!(sidebar.rect.width, 220.0);
        assert_eq!(sidebar.rect.y, header.rect.bottom());

        // The fill child gets the dock rect minus the consumed edges
        assert_eq!(content.rect.x, sidebar.rect.right());
        assert_eq!(content.rect.y, header.rect.bottom());
        assert_eq!(content.rect.width, dock.rect.width - 220.0);
        assert_eq!(content.rect.height, dock.rect.height - 64.0);
    }

    #[test]
    fn top_level_sections_dock_the_canvas() {
        let source = "Header \"App\"\nContent\n    Label \"x\"\nFooter \"F\"";
        let document = parse_clean(source);
        let tree = compute_layout(&document, 800.0, 600.0);

        assert_eq!(tree.nodes.len(), 3);
        let header = &tree.nodes[0];
        let content = &tree.nodes[1];
        let footer = &tree.nodes[2];

        assert_eq!(header.rect.y, DOC_PADDING);
        assert_eq!(footer.rect.bottom(), 600.0 - DOC_PADDING);
        assert_eq!(
            content.rect.height,
            600.0 - 2.0 * DOC_PADDING - header.rect.height - footer.rect.height
        );
    }

    #[test]
    fn grid_wraps_after_the_column_count() {
        let source = "Grid cols=2\n    Button \"1\"\n    Button \"2\"\n    Button \"3\"\n    Button \"4\"\n    Button \"5\"";
        let document = parse_clean(source);
        let tree = compute_layout(&document, 800.0, 600.0);

        let cells = &tree.nodes[0].children;
        assert_eq!(cells.len(), 5);
        // Rows (0,1), (2,3), (4)
        assert_eq!(cells[0].rect.y, cells[1].rect.y);
        assert_eq!(cells[2].rect.y, cells[3].rect.y);
        assert!(cells[2].rect.y > cells[0].rect.y);
        assert!(cells[4].rect.y > cells[2].rect.y);
        // Column positions repeat
        assert_eq!(cells[0].rect.x, cells[2].rect.x);
        assert_eq!(cells[0].rect.x, cells[4].rect.x);
        assert_eq!(cells[1].rect.x, cells[3].rect.x);
    }

    #[test]
    fn canvas_children_sit_at_their_offsets() {
        let source = "Canvas\n    Card \"A\" x=40 y=30\n    Card \"B\"";
        let document = parse_clean(source);
        let tree = compute_layout(&document, 800.0, 600.0);

        let canvas = &tree.nodes[0];
        let a = &canvas.children[0];
        let b = &canvas.children[1];
        assert_eq!(a.rect.x, canvas.rect.x + 40.0);
        assert_eq!(a.rect.y, canvas.rect.y + 30.0);
        assert_eq!(b.rect.x, canvas.rect.x);
        assert_eq!(b.rect.y, canvas.rect.y);
    }

    #[test]
    fn justify_between_pushes_the_last_child_to_the_edge() {
        let source = "Horizontal justify=between\n    Button \"A\"\n    Button \"B\"";
        let document = parse_clean(source);
        let tree = compute_layout(&document, 800.0, 600.0);

        let row = &tree.nodes[0];
        let children = &row.children;
        assert_eq!(children[0].rect.x, row.rect.x);
        assert_eq!(children[1].rect.right(), row.rect.right());
    }

    #[test]
    fn justify_overflow_clips_silently() {
        let source = "Horizontal justify=between w=100\n    Button \"Long label A\"\n    Button \"Long label B\"";
        let document = parse_clean(source);
        let tree = compute_layout(&document, 800.0, 600.0);

        let children = &tree.nodes[0].children;
        // No shifting happened; children simply overflow to the right
        assert_eq!(children[0].rect.x, tree.nodes[0].rect.x);
        assert!(children[1].rect.right() > tree.nodes[0].rect.right());
    }

    #[test]
    fn repeat_duplicates_its_template() {
        let source = "Vertical\n    repeat 3\n        Button \"X\"";
        let document = parse_clean(source);
        let tree = compute_layout(&document, 800.0, 600.0);

        let children = &tree.nodes[0].children;
        assert_eq!(children.len(), 3);
        for node in children {
            assert_eq!(node.element.kind, ElementKind::Button);
            assert_eq!(node.element.text.as_deref(), Some("X"));
        }
        // Copies flow like ordinary siblings
        assert!(children[1].rect.y > children[0].rect.y);
    }

    #[test]
    fn conditional_children_always_flow() {
        let source = "Vertical\n    if admin\n        Button \"Delete\"\n    Label \"after\"";
        let document = parse_clean(source);
        let tree = compute_layout(&document, 800.0, 600.0);

        let children = &tree.nodes[0].children;
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].element.kind, ElementKind::Button);
        assert_eq!(children[1].element.kind, ElementKind::Label);
    }

    #[test]
    fn modal_overlays_centered_on_the_canvas() {
        let source = "Content\n    Label \"body\"\nModal \"Confirm\"\n    Label \"sure?\"";
        let document = parse_clean(source);
        let tree = compute_layout(&document, 800.0, 600.0);

        assert_eq!(tree.nodes.len(), 1, "the modal left the flow");
        assert_eq!(tree.overlays.len(), 1);
        let modal = &tree.overlays[0];
        assert_eq!(modal.rect.width, 800.0 * MODAL_FRACTION);
        assert_eq!(modal.rect.height, 600.0 * MODAL_FRACTION);
        assert_eq!(modal.rect.center_x(), 400.0);
        assert_eq!(modal.rect.center_y(), 300.0);
    }

    #[test]
    fn drawer_hugs_the_right_edge_full_height() {
        let source = "Content\n    Label \"body\"\nDrawer \"Filters\"\n    Checkbox \"Open\"";
        let document = parse_clean(source);
        let tree = compute_layout(&document, 800.0, 600.0);

        let drawer = &tree.overlays[0];
        assert_eq!(drawer.rect.width, 300.0);
        assert_eq!(drawer.rect.right(), 800.0);
        assert_eq!(drawer.rect.y, 0.0);
        assert_eq!(drawer.rect.height, 600.0);
    }

    #[test]
    fn collapsed_sections_keep_only_their_header_strip() {
        let source = "Card \"Info\" collapsed\n    Label \"hidden\"";
        let document = parse_clean(source);
        let tree = compute_layout(&document, 800.0, 600.0);

        let card = &tree.nodes[0];
        assert_eq!(card.rect.height, COLLAPSED_HEIGHT);
        assert!(card.children.is_empty());
    }

    #[test]
    fn explicit_sizes_override_defaults() {
        let source = "Vertical\n    Button \"A\" w=300 h=50";
        let document = parse_clean(source);
        let tree = compute_layout(&document, 800.0, 600.0);

        let button = &tree.nodes[0].children[0];
        assert_eq!(button.rect.width, 300.0);
        assert_eq!(button.rect.height, 50.0);
    }

    #[test]
    fn percent_width_resolves_against_the_parent() {
        let source = "Vertical\n    Panel w=50%\n        Label \"x\"";
        let document = parse_clean(source);
        let tree = compute_layout(&document, 800.0, 600.0);

        let vertical = &tree.nodes[0];
        let panel = &vertical.children[0];
        assert_eq!(panel.rect.width, vertical.rect.width / 2.0);
    }

    #[test]
    fn tabs_strip_with_active_content() {
        let source = "Tabs\n    Tab \"One\"\n    Tab \"Two\" active\n        Label \"page two\"";
        let document = parse_clean(source);
        let tree = compute_layout(&document, 800.0, 600.0);

        let tabs = &tree.nodes[0];
        let one = &tabs.children[0];
        let two = &tabs.children[1];
        assert_eq!(one.rect.y, two.rect.y, "buttons share the strip");
        assert!(two.rect.x > one.rect.x);
        assert!(one.children.is_empty(), "inactive tab has no content");
        assert_eq!(two.children.len(), 1);
        assert!(
            two.children[0].rect.y >= one.rect.bottom(),
            "content sits below the strip"
        );
    }

    #[test]
    fn sections_grow_past_their_default_height() {
        let source = "Card \"Tall\"\n    Button \"1\"\n    Button \"2\"\n    Button \"3\"\n    Button \"4\"\n    Button \"5\"";
        let document = parse_clean(source);
        let tree = compute_layout(&document, 800.0, 600.0);

        let card = &tree.nodes[0];
        let content = 5.0 * 36.0 + 4.0 * GAP;
        assert_eq!(
            card.rect.height,
            content + 2.0 * FRAME_PADDING + TITLE_STRIP
        );
        assert!(card.rect.height > 180.0, "grew past the default");
    }
}
