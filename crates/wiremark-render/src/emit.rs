//! Per-kind SVG emitters.
//!
//! [`SvgRenderer::node`] dispatches on the element kind, emits that node's
//! fragment, then recurses into the children, so paint order is parent
//! first. Kinds without a dedicated emitter degrade to a dashed placeholder
//! box labeled with the kind name; nothing here can fail.
//!
//! Row, strip and inset arithmetic reuses the constants from
//! `wiremark_layout::metrics` so glyphs land inside the boxes the layout
//! pass accounted for.

use crate::svg::{SvgRenderer, fit_text};
use wiremark_ast::{Element, ElementKind, Payload, kind_spec};
use wiremark_layout::metrics::{
    CHAR_WIDTH, FRAME_PADDING, HEADER_ROW_HEIGHT, ITEM_HEIGHT, ROW_HEIGHT, TEXT_INSET, TITLE_STRIP,
};
use wiremark_layout::{LayoutNode, Rect};

/// Fraction attribute (`value=0..100`) for sliders and progress bars.
fn fraction(element: &Element, default: f64) -> f64 {
    element.number_attr("value").unwrap_or(default).clamp(0.0, 100.0) / 100.0
}

fn is_on(element: &Element) -> bool {
    element.modifiers.checked || element.modifiers.selected || element.modifiers.active
}

impl SvgRenderer<'_> {
    /// Emit one layout node and its subtree.
    pub(crate) fn node(&mut self, node: &LayoutNode<'_>) {
        let disabled = node.element.modifiers.disabled;
        if disabled {
            self.out.push_str("  <g class=\"wm-disabled\">\n");
        }
        self.fragment(node);
        for child in &node.children {
            self.node(child);
        }
        if disabled {
            self.out.push_str("  </g>\n");
        }
    }

    /// Overlays paint after the flowed tree; a modal also dims everything
    /// beneath it.
    pub(crate) fn overlay(&mut self, node: &LayoutNode<'_>) {
        if node.element.kind == ElementKind::Modal {
            let canvas = self.canvas;
            self.rounded_box(canvas, 0.0, "wm-scrim");
        }
        self.node(node);
    }

    fn fragment(&mut self, node: &LayoutNode<'_>) {
        match node.element.kind {
            // Pure containers draw nothing
            ElementKind::Vertical
            | ElementKind::Horizontal
            | ElementKind::Grid
            | ElementKind::Dock
            | ElementKind::Canvas
            | ElementKind::ButtonGroup
            | ElementKind::Spacer => {}

            ElementKind::Scroll => self.scroll_frame(node),

            // Content is the page body; it draws no frame of its own
            ElementKind::Content => self.section_title_only(node),

            ElementKind::Header
            | ElementKind::Footer
            | ElementKind::Sidebar
            | ElementKind::Panel
            | ElementKind::Toolbar
            | ElementKind::StatusBar
            | ElementKind::Navbar
            | ElementKind::Form
            | ElementKind::Accordion => self.section(node, "wm-surface"),

            ElementKind::Card | ElementKind::Menu => self.section(node, "wm-surface wm-shadowed"),

            ElementKind::Modal => self.modal(node),
            ElementKind::Drawer => self.section(node, "wm-surface wm-shadowed"),

            ElementKind::Button => self.button(node),
            ElementKind::TextInput
            | ElementKind::SearchInput
            | ElementKind::PasswordInput
            | ElementKind::NumberInput
            | ElementKind::DatePicker
            | ElementKind::FilePicker => self.input(node),
            ElementKind::TextArea => self.text_area(node),
            ElementKind::Label => self.label(node, "start"),
            ElementKind::Heading => self.heading(node),
            ElementKind::Link => self.link(node),
            ElementKind::Checkbox => self.checkbox(node),
            ElementKind::Radio => self.radio(node),
            ElementKind::Toggle => self.toggle(node),
            ElementKind::Slider => self.slider(node),
            ElementKind::Dropdown => self.dropdown(node),
            ElementKind::ProgressBar => self.progress(node),
            ElementKind::Spinner => self.spinner(node),
            ElementKind::Image | ElementKind::Icon => self.crossed_box(node),
            ElementKind::Avatar => self.avatar(node),
            ElementKind::Badge => self.badge(node),
            ElementKind::Divider => self.divider(node),

            ElementKind::Tabs => self.tabs(node),
            ElementKind::Tab => self.tab(node),
            ElementKind::Table => self.table(node, false),
            ElementKind::DataGrid => self.table(node, true),
            ElementKind::Tree => self.tree(node),
            ElementKind::List => self.list(node),
            ElementKind::Breadcrumb => self.breadcrumb(node),
            ElementKind::Pagination => self.pagination(node),
            ElementKind::Chart => self.chart(node),

            // Anything else (structural kinds that escaped expansion
            // included) degrades to the generic placeholder
            _ => self.placeholder(node),
        }
    }

    // ====== Sections ======

    /// Frame plus title. Collapsed sections get a chevron in their strip.
    fn section(&mut self, node: &LayoutNode<'_>, class: &str) {
        let rect = node.rect;
        let element = node.element;
        self.box_shape(rect, class);

        if element.modifiers.collapsed {
            if let Some(text) = &element.text {
                self.text(
                    rect.x + FRAME_PADDING,
                    rect.center_y(),
                    "start",
                    "wm-text",
                    text,
                );
            }
            self.collapse_chevron(rect.right() - 18.0, rect.center_y());
            return;
        }
        if let Some(text) = &element.text {
            if node.children.is_empty() && element.payload.is_none() {
                self.text(rect.x + TEXT_INSET, rect.center_y(), "start", "wm-text", text);
            } else {
                self.text(
                    rect.x + FRAME_PADDING,
                    rect.y + FRAME_PADDING + TITLE_STRIP / 2.0,
                    "start",
                    "wm-text",
                    text,
                );
            }
        }
    }

    /// Title text without a frame, for the Content region.
    fn section_title_only(&mut self, node: &LayoutNode<'_>) {
        if let Some(text) = &node.element.text {
            let rect = node.rect;
            if node.children.is_empty() {
                self.text(rect.x, rect.center_y(), "start", "wm-muted", text);
            } else {
                self.text(
                    rect.x + FRAME_PADDING,
                    rect.y + FRAME_PADDING + TITLE_STRIP / 2.0,
                    "start",
                    "wm-muted",
                    text,
                );
            }
        }
    }

    fn modal(&mut self, node: &LayoutNode<'_>) {
        let rect = node.rect;
        self.box_shape(rect, "wm-surface wm-shadowed");
        if let Some(text) = &node.element.text {
            self.text(
                rect.x + FRAME_PADDING,
                rect.y + FRAME_PADDING + TITLE_STRIP / 2.0,
                "start",
                "wm-text",
                text,
            );
        }
        // Close glyph, top right
        let cx = rect.right() - 20.0;
        let cy = rect.y + FRAME_PADDING + TITLE_STRIP / 2.0;
        self.line(cx - 5.0, cy - 5.0, cx + 5.0, cy + 5.0, "wm-stroke");
        self.line(cx - 5.0, cy + 5.0, cx + 5.0, cy - 5.0, "wm-stroke");
    }

    fn scroll_frame(&mut self, node: &LayoutNode<'_>) {
        let rect = node.rect;
        self.box_shape(rect, "wm-frame");
        // Scrollbar affordance on the right edge
        let track = Rect::new(rect.right() - 10.0, rect.y + 4.0, 6.0, rect.height - 8.0);
        self.rounded_box(track, 3.0, "wm-track");
        let thumb = Rect::new(track.x, track.y, track.width, (track.height * 0.4).max(12.0));
        self.rounded_box(thumb, 3.0, "wm-muted-fill");
    }

    fn collapse_chevron(&mut self, cx: f64, cy: f64) {
        let d = format!(
            "M {:.2} {:.2} L {:.2} {:.2} L {:.2} {:.2}",
            cx - 5.0,
            cy - 2.5,
            cx,
            cy + 2.5,
            cx + 5.0,
            cy - 2.5
        );
        self.path(&d, "wm-stroke");
    }

    // ====== Controls ======

    fn button(&mut self, node: &LayoutNode<'_>) {
        let rect = node.rect;
        let element = node.element;
        let (box_class, text_class) = if element.modifiers.primary {
            ("wm-primary", "wm-primary-text")
        } else {
            ("wm-surface", "wm-text")
        };
        self.box_shape(rect, box_class);
        if let Some(text) = &element.text {
            self.text(rect.center_x(), rect.center_y(), "middle", text_class, text);
        }
    }

    /// Single-line input box with a kind-specific affordance glyph.
    fn input(&mut self, node: &LayoutNode<'_>) {
        let rect = node.rect;
        let element = node.element;
        self.box_shape(rect, "wm-surface");

        let mut text_x = rect.x + TEXT_INSET;
        let cy = rect.center_y();
        match element.kind {
            ElementKind::SearchInput => {
                let gx = rect.x + 16.0;
                self.circle(gx, cy - 2.0, 5.0, "wm-muted-stroke");
                self.line(gx + 3.5, cy + 1.5, gx + 7.0, cy + 5.0, "wm-muted-stroke");
                text_x = rect.x + 30.0;
            }
            ElementKind::NumberInput => {
                let gx = rect.right() - 16.0;
                self.stepper_chevron(gx, cy - 5.0, true);
                self.stepper_chevron(gx, cy + 5.0, false);
            }
            ElementKind::DatePicker => {
                let gx = rect.right() - 26.0;
                let glyph = Rect::new(gx, cy - 6.0, 14.0, 12.0);
                self.rounded_box(glyph, 1.0, "wm-muted-stroke");
                self.line(gx + 4.0, cy - 8.0, gx + 4.0, cy - 4.0, "wm-muted-stroke");
                self.line(gx + 10.0, cy - 8.0, gx + 10.0, cy - 4.0, "wm-muted-stroke");
            }
            ElementKind::FilePicker => {
                let chip = Rect::new(rect.right() - 70.0, rect.y + 5.0, 64.0, rect.height - 10.0);
                self.rounded_box(chip, 3.0, "wm-track");
                self.text(chip.center_x(), chip.center_y(), "middle", "wm-small", "Browse");
            }
            _ => {}
        }

        let budget = rect.width - (text_x - rect.x) - TEXT_INSET;
        if let Some(text) = &element.text {
            let shown = if element.kind == ElementKind::PasswordInput {
                "•".repeat(text.chars().count().min(8))
            } else {
                fit_text(text, budget)
            };
            self.text(text_x, cy, "start", "wm-text", &shown);
        } else if let Some(placeholder) = element.string_attr("placeholder") {
            self.text(text_x, cy, "start", "wm-muted", &fit_text(placeholder, budget));
        }
    }

    fn stepper_chevron(&mut self, cx: f64, cy: f64, up: bool) {
        let dy = if up { 2.0 } else { -2.0 };
        let d = format!(
            "M {:.2} {:.2} L {:.2} {:.2} L {:.2} {:.2}",
            cx - 4.0,
            cy + dy,
            cx,
            cy - dy,
            cx + 4.0,
            cy + dy
        );
        self.path(&d, "wm-muted-stroke");
    }

    fn text_area(&mut self, node: &LayoutNode<'_>) {
        let rect = node.rect;
        let element = node.element;
        self.box_shape(rect, "wm-surface");
        let budget = rect.width - 2.0 * TEXT_INSET;
        if let Some(text) = &element.text {
            self.text(
                rect.x + TEXT_INSET,
                rect.y + 18.0,
                "start",
                "wm-text",
                &fit_text(text, budget),
            );
        } else if let Some(placeholder) = element.string_attr("placeholder") {
            self.text(
                rect.x + TEXT_INSET,
                rect.y + 18.0,
                "start",
                "wm-muted",
                &fit_text(placeholder, budget),
            );
        }
        // Resize notch
        let (rx, ry) = (rect.right(), rect.bottom());
        self.line(rx - 10.0, ry - 3.0, rx - 3.0, ry - 10.0, "wm-muted-stroke");
        self.line(rx - 6.0, ry - 3.0, rx - 3.0, ry - 6.0, "wm-muted-stroke");
    }

    fn label(&mut self, node: &LayoutNode<'_>, anchor: &str) {
        if let Some(text) = &node.element.text {
            let x = match anchor {
                "middle" => node.rect.center_x(),
                _ => node.rect.x,
            };
            self.text(x, node.rect.center_y(), anchor, "wm-text", text);
        }
    }

    fn heading(&mut self, node: &LayoutNode<'_>) {
        if let Some(text) = &node.element.text {
            self.text(
                node.rect.x,
                node.rect.center_y(),
                "start",
                "wm-heading",
                text,
            );
        }
    }

    fn link(&mut self, node: &LayoutNode<'_>) {
        if let Some(text) = &node.element.text {
            self.text(node.rect.x, node.rect.center_y(), "start", "wm-link", text);
        }
    }

    fn checkbox(&mut self, node: &LayoutNode<'_>) {
        let rect = node.rect;
        let cy = rect.center_y();
        let glyph = Rect::new(rect.x, cy - 8.0, 16.0, 16.0);
        self.rounded_box(glyph, 3.0, "wm-surface");
        if node.element.modifiers.checked {
            let d = format!(
                "M {:.2} {:.2} L {:.2} {:.2} L {:.2} {:.2}",
                glyph.x + 3.5,
                cy + 0.5,
                glyph.x + 7.0,
                cy + 4.0,
                glyph.x + 13.0,
                cy - 4.5
            );
            self.path(&d, "wm-primary-stroke");
        }
        if let Some(text) = &node.element.text {
            self.text(rect.x + 24.0, cy, "start", "wm-text", text);
        }
    }

    fn radio(&mut self, node: &LayoutNode<'_>) {
        let rect = node.rect;
        let cy = rect.center_y();
        self.circle(rect.x + 8.0, cy, 8.0, "wm-surface");
        if node.element.modifiers.checked || node.element.modifiers.selected {
            self.circle(rect.x + 8.0, cy, 4.0, "wm-primary");
        }
        if let Some(text) = &node.element.text {
            self.text(rect.x + 24.0, cy, "start", "wm-text", text);
        }
    }

    fn toggle(&mut self, node: &LayoutNode<'_>) {
        let rect = node.rect;
        let cy = rect.center_y();
        let on = is_on(node.element);
        let track = Rect::new(rect.x, cy - 10.0, 36.0, 20.0);
        self.rounded_box(track, 10.0, if on { "wm-primary" } else { "wm-track" });
        let knob_x = if on { track.right() - 10.0 } else { track.x + 10.0 };
        self.circle(knob_x, cy, 8.0, "wm-surface");
        if let Some(text) = &node.element.text {
            self.text(rect.x + 44.0, cy, "start", "wm-text", text);
        }
    }

    fn slider(&mut self, node: &LayoutNode<'_>) {
        let rect = node.rect;
        let cy = rect.center_y();
        let v = fraction(node.element, 50.0);
        let track = Rect::new(rect.x, cy - 2.0, rect.width, 4.0);
        self.rounded_box(track, 2.0, "wm-track");
        let filled = Rect::new(rect.x, cy - 2.0, rect.width * v, 4.0);
        self.rounded_box(filled, 2.0, "wm-primary");
        self.circle(rect.x + rect.width * v, cy, 8.0, "wm-surface");
    }

    fn dropdown(&mut self, node: &LayoutNode<'_>) {
        let rect = node.rect;
        let element = node.element;
        self.box_shape(rect, "wm-surface");
        let cy = rect.center_y();

        let selected = element.text.as_deref().or_else(|| {
            match &element.payload {
                Some(Payload::Items(items)) => items.first().map(String::as_str),
                _ => None,
            }
        });
        if let Some(text) = selected {
            let budget = rect.width - 2.0 * TEXT_INSET - 20.0;
            self.text(rect.x + TEXT_INSET, cy, "start", "wm-text", &fit_text(text, budget));
        }
        let gx = rect.right() - 20.0;
        let d = format!(
            "M {:.2} {:.2} L {:.2} {:.2} L {:.2} {:.2}",
            gx,
            cy - 2.5,
            gx + 5.0,
            cy + 2.5,
            gx + 10.0,
            cy - 2.5
        );
        self.path(&d, "wm-stroke");
    }

    fn progress(&mut self, node: &LayoutNode<'_>) {
        let rect = node.rect;
        let v = fraction(node.element, 60.0);
        let radius = rect.height / 2.0;
        self.rounded_box(rect, radius, "wm-track");
        if v > 0.0 {
            let filled = Rect::new(rect.x, rect.y, rect.width * v, rect.height);
            self.rounded_box(filled, radius, "wm-primary");
        }
    }

    fn spinner(&mut self, node: &LayoutNode<'_>) {
        let rect = node.rect;
        let r = (rect.width.min(rect.height) / 2.0 - 3.0).max(4.0);
        let (cx, cy) = (rect.center_x(), rect.center_y());
        // Three-quarter arc
        let d = format!(
            "M {:.2} {:.2} A {r:.2} {r:.2} 0 1 1 {:.2} {:.2}",
            cx,
            cy - r,
            cx - r,
            cy
        );
        self.path(&d, "wm-primary-stroke");
    }

    /// Image and icon placeholder: framed box with corner-to-corner cross.
    fn crossed_box(&mut self, node: &LayoutNode<'_>) {
        let rect = node.rect;
        self.box_shape(rect, "wm-surface");
        self.line(rect.x, rect.y, rect.right(), rect.bottom(), "wm-muted-stroke");
        self.line(rect.right(), rect.y, rect.x, rect.bottom(), "wm-muted-stroke");
        if let Some(text) = &node.element.text {
            self.text(
                rect.center_x(),
                rect.bottom() - 12.0,
                "middle",
                "wm-small wm-muted",
                text,
            );
        }
    }

    fn avatar(&mut self, node: &LayoutNode<'_>) {
        let rect = node.rect;
        let r = rect.width.min(rect.height) / 2.0;
        let (cx, cy) = (rect.center_x(), rect.center_y());
        self.circle(cx, cy, r, "wm-surface");
        if let Some(text) = &node.element.text {
            let initials: String = text
                .split_whitespace()
                .filter_map(|word| word.chars().next())
                .take(2)
                .flat_map(char::to_uppercase)
                .collect();
            self.text(cx, cy, "middle", "wm-small", &initials);
        } else {
            // Head and shoulders
            self.circle(cx, cy - r * 0.3, r * 0.3, "wm-muted-fill");
            let d = format!(
                "M {:.2} {:.2} Q {cx:.2} {:.2} {:.2} {:.2}",
                cx - r * 0.55,
                cy + r * 0.75,
                cy + r * 0.05,
                cx + r * 0.55,
                cy + r * 0.75
            );
            self.path(&d, "wm-muted-fill");
        }
    }

    fn badge(&mut self, node: &LayoutNode<'_>) {
        let rect = node.rect;
        self.rounded_box(rect, rect.height / 2.0, "wm-primary");
        if let Some(text) = &node.element.text {
            self.text(
                rect.center_x(),
                rect.center_y(),
                "middle",
                "wm-small wm-primary-text",
                text,
            );
        }
    }

    fn divider(&mut self, node: &LayoutNode<'_>) {
        let rect = node.rect;
        if rect.width >= rect.height {
            let cy = rect.center_y();
            self.line(rect.x, cy, rect.right(), cy, "wm-muted-stroke");
        } else {
            let cx = rect.center_x();
            self.line(cx, rect.y, cx, rect.bottom(), "wm-muted-stroke");
        }
    }

    // ====== Components ======

    fn tabs(&mut self, node: &LayoutNode<'_>) {
        let rect = node.rect;
        self.box_shape(rect, "wm-surface");
        // Separator under the tab buttons
        let strip_bottom = node
            .children
            .iter()
            .find(|c| c.element.kind == ElementKind::Tab)
            .map(|c| c.rect.bottom())
            .unwrap_or(rect.y + FRAME_PADDING + 32.0);
        self.line(
            rect.x + FRAME_PADDING,
            strip_bottom,
            rect.right() - FRAME_PADDING,
            strip_bottom,
            "wm-muted-stroke",
        );

        // Layout defaults the first tab to active when none is marked; the
        // underline has to follow that choice.
        let tabs: Vec<&LayoutNode<'_>> = node
            .children
            .iter()
            .filter(|c| c.element.kind == ElementKind::Tab)
            .collect();
        if !tabs.iter().any(|t| is_on(t.element)) {
            if let Some(first) = tabs.first() {
                let r = first.rect;
                self.line(r.x + 4.0, r.bottom(), r.right() - 4.0, r.bottom(), "wm-accent-stroke");
            }
        }
    }

    fn tab(&mut self, node: &LayoutNode<'_>) {
        let rect = node.rect;
        let active = is_on(node.element);
        if let Some(text) = &node.element.text {
            let class = if active { "wm-text" } else { "wm-muted" };
            self.text(rect.center_x(), rect.center_y(), "middle", class, text);
        }
        if active {
            self.line(
                rect.x + 4.0,
                rect.bottom(),
                rect.right() - 4.0,
                rect.bottom(),
                "wm-accent-stroke",
            );
        }
    }

    fn table(&mut self, node: &LayoutNode<'_>, grid: bool) {
        let rect = node.rect;
        let element = node.element;
        let striped = grid || element.modifiers.striped;
        let sortable = grid || element.modifiers.sortable;
        self.box_shape(rect, "wm-surface");

        let title = if element.text.is_some() { TITLE_STRIP } else { 0.0 };
        if let Some(text) = &element.text {
            self.text(
                rect.x + FRAME_PADDING,
                rect.y + FRAME_PADDING + TITLE_STRIP / 2.0,
                "start",
                "wm-text",
                text,
            );
        }

        let Some(Payload::Table(data)) = &element.payload else {
            return;
        };
        let inner_x = rect.x + FRAME_PADDING;
        let inner_w = rect.width - 2.0 * FRAME_PADDING;
        let mut y = rect.y + FRAME_PADDING + title;
        let cols = data
            .columns
            .len()
            .max(data.rows.iter().map(Vec::len).max().unwrap_or(0))
            .max(1);
        let col_w = inner_w / cols as f64;
        let body_bottom = y
            + if data.has_header { HEADER_ROW_HEIGHT } else { 0.0 }
            + data.rows.len() as f64 * ROW_HEIGHT;

        if data.has_header {
            let band = Rect::new(inner_x, y, inner_w, HEADER_ROW_HEIGHT);
            self.rounded_box(band, 0.0, "wm-track");
            for (i, column) in data.columns.iter().enumerate() {
                let x = inner_x + i as f64 * col_w;
                self.text(
                    x + 8.0,
                    y + HEADER_ROW_HEIGHT / 2.0,
                    "start",
                    "wm-text",
                    &fit_text(column, col_w - 16.0),
                );
                if sortable {
                    // Sort caret
                    let gx = x + col_w - 14.0;
                    let gy = y + HEADER_ROW_HEIGHT / 2.0;
                    let d = format!(
                        "M {:.2} {:.2} L {:.2} {:.2} L {:.2} {:.2} Z",
                        gx,
                        gy + 2.0,
                        gx + 4.0,
                        gy - 2.0,
                        gx + 8.0,
                        gy + 2.0
                    );
                    self.path(&d, "wm-muted-fill");
                }
            }
            y += HEADER_ROW_HEIGHT;
        }

        for (r, row) in data.rows.iter().enumerate() {
            if striped && r % 2 == 1 {
                let band = Rect::new(inner_x, y, inner_w, ROW_HEIGHT);
                self.rounded_box(band, 0.0, "wm-track");
            }
            for c in 0..cols {
                if let Some(cell) = row.get(c) {
                    self.text(
                        inner_x + c as f64 * col_w + 8.0,
                        y + ROW_HEIGHT / 2.0,
                        "start",
                        "wm-text",
                        &fit_text(cell, col_w - 16.0),
                    );
                }
            }
            y += ROW_HEIGHT;
            if r + 1 < data.rows.len() {
                self.line(inner_x, y, inner_x + inner_w, y, "wm-muted-stroke");
            }
        }

        // Column separators span header and body
        for c in 1..cols {
            let x = inner_x + c as f64 * col_w;
            self.line(x, rect.y + FRAME_PADDING + title, x, body_bottom, "wm-muted-stroke");
        }
    }

    fn tree(&mut self, node: &LayoutNode<'_>) {
        let rect = node.rect;
        let element = node.element;
        self.box_shape(rect, "wm-surface");
        let title = if element.text.is_some() { TITLE_STRIP } else { 0.0 };
        if let Some(text) = &element.text {
            self.text(
                rect.x + FRAME_PADDING,
                rect.y + FRAME_PADDING + TITLE_STRIP / 2.0,
                "start",
                "wm-text",
                text,
            );
        }
        let Some(Payload::Tree(items)) = &element.payload else {
            return;
        };
        let top = rect.y + FRAME_PADDING + title;
        for (i, item) in items.iter().enumerate() {
            let cy = top + i as f64 * ITEM_HEIGHT + ITEM_HEIGHT / 2.0;
            let x = rect.x + FRAME_PADDING + item.depth as f64 * 16.0;
            if item.is_branch {
                // Expander caret
                let d = format!(
                    "M {:.2} {:.2} L {:.2} {:.2} L {:.2} {:.2} Z",
                    x,
                    cy - 4.0,
                    x + 6.0,
                    cy,
                    x,
                    cy + 4.0
                );
                self.path(&d, "wm-muted-fill");
            } else {
                self.circle(x + 3.0, cy, 2.0, "wm-muted-fill");
            }
            let budget = rect.right() - FRAME_PADDING - (x + 12.0);
            self.text(x + 12.0, cy, "start", "wm-text", &fit_text(&item.text, budget));
        }
    }

    fn list(&mut self, node: &LayoutNode<'_>) {
        let rect = node.rect;
        let element = node.element;
        self.box_shape(rect, "wm-surface");
        let title = if element.text.is_some() { TITLE_STRIP } else { 0.0 };
        if let Some(text) = &element.text {
            self.text(
                rect.x + FRAME_PADDING,
                rect.y + FRAME_PADDING + TITLE_STRIP / 2.0,
                "start",
                "wm-text",
                text,
            );
        }
        let Some(Payload::Items(items)) = &element.payload else {
            return;
        };
        let top = rect.y + FRAME_PADDING + title;
        let budget = rect.width - 2.0 * FRAME_PADDING - 16.0;
        for (i, item) in items.iter().enumerate() {
            let cy = top + i as f64 * ITEM_HEIGHT + ITEM_HEIGHT / 2.0;
            self.circle(rect.x + FRAME_PADDING + 4.0, cy, 2.5, "wm-muted-fill");
            self.text(
                rect.x + FRAME_PADDING + 16.0,
                cy,
                "start",
                "wm-text",
                &fit_text(item, budget),
            );
        }
    }

    fn breadcrumb(&mut self, node: &LayoutNode<'_>) {
        let rect = node.rect;
        let cy = rect.center_y();
        let items: &[String] = match &node.element.payload {
            Some(Payload::Items(items)) => items,
            _ => return,
        };
        let mut x = rect.x;
        let last = items.len().saturating_sub(1);
        for (i, item) in items.iter().enumerate() {
            let class = if i == last { "wm-text" } else { "wm-link" };
            self.text(x, cy, "start", class, item);
            x += item.chars().count() as f64 * CHAR_WIDTH + 8.0;
            if i < last {
                self.text(x, cy, "start", "wm-muted", "›");
                x += 14.0;
            }
        }
    }

    fn pagination(&mut self, node: &LayoutNode<'_>) {
        let rect = node.rect;
        let cy = rect.center_y();
        let cell = 28.0;
        let gap = 6.0;
        let labels = ["‹", "1", "2", "3", "›"];
        let total = labels.len() as f64 * cell + (labels.len() as f64 - 1.0) * gap;
        let mut x = rect.center_x() - total / 2.0;
        for (i, label) in labels.iter().enumerate() {
            let cellrect = Rect::new(x, cy - cell / 2.0, cell, cell);
            let (box_class, text_class) = if i == 1 {
                ("wm-primary", "wm-primary-text")
            } else {
                ("wm-surface", "wm-text")
            };
            self.box_shape(cellrect, box_class);
            self.text(cellrect.center_x(), cy, "middle", text_class, label);
            x += cell + gap;
        }
    }

    fn chart(&mut self, node: &LayoutNode<'_>) {
        let rect = node.rect;
        let element = node.element;
        self.box_shape(rect, "wm-surface");
        let title = if element.text.is_some() { TITLE_STRIP } else { 0.0 };
        if let Some(text) = &element.text {
            self.text(
                rect.x + FRAME_PADDING,
                rect.y + FRAME_PADDING + TITLE_STRIP / 2.0,
                "start",
                "wm-text",
                text,
            );
        }
        let inner = Rect::new(
            rect.x + FRAME_PADDING,
            rect.y + FRAME_PADDING + title,
            rect.width - 2.0 * FRAME_PADDING,
            rect.height - 2.0 * FRAME_PADDING - title,
        );
        match element.string_attr("type") {
            Some("line") => self.line_chart(inner),
            Some("pie") => self.pie_chart(inner),
            _ => self.bar_chart(inner),
        }
    }

    fn bar_chart(&mut self, inner: Rect) {
        // Stylised, not data-driven
        let heights = [0.55, 0.85, 0.4, 0.7, 0.3];
        let slot = inner.width / heights.len() as f64;
        let bar_w = slot * 0.6;
        for (i, h) in heights.iter().enumerate() {
            let bh = inner.height * h;
            let bar = Rect::new(
                inner.x + i as f64 * slot + (slot - bar_w) / 2.0,
                inner.bottom() - bh,
                bar_w,
                bh,
            );
            self.rounded_box(bar, 2.0, "wm-primary");
        }
        self.line(inner.x, inner.bottom(), inner.right(), inner.bottom(), "wm-stroke");
    }

    fn line_chart(&mut self, inner: Rect) {
        let points = [0.7, 0.35, 0.55, 0.2, 0.45, 0.15];
        let step = inner.width / (points.len() as f64 - 1.0);
        let d: String = points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let x = inner.x + i as f64 * step;
                let y = inner.y + inner.height * p;
                let op = if i == 0 { "M" } else { " L" };
                format!("{op} {x:.2} {y:.2}")
            })
            .collect();
        self.path(&d, "wm-primary-stroke");
        self.line(inner.x, inner.bottom(), inner.right(), inner.bottom(), "wm-stroke");
    }

    fn pie_chart(&mut self, inner: Rect) {
        let r = (inner.width.min(inner.height) / 2.0 - 2.0).max(8.0);
        let (cx, cy) = (inner.center_x(), inner.center_y());
        self.circle(cx, cy, r, "wm-track");
        // Wedge at twelve to four o'clock
        let d = format!(
            "M {cx:.2} {cy:.2} L {cx:.2} {:.2} A {r:.2} {r:.2} 0 0 1 {:.2} {:.2} Z",
            cy - r,
            cx + r * 0.87,
            cy + r * 0.5
        );
        self.path(&d, "wm-primary");
        self.circle(cx, cy, r, "wm-stroke");
    }

    // ====== Fallback ======

    /// Dashed box labeled with the kind, for anything without an emitter.
    fn placeholder(&mut self, node: &LayoutNode<'_>) {
        let rect = node.rect;
        self.box_shape(rect, "wm-placeholder");
        self.text(
            rect.center_x(),
            rect.center_y(),
            "middle",
            "wm-small wm-muted",
            kind_spec(node.element.kind).keyword,
        );
    }
}
