//! SVG document assembly and drawing primitives.
//!
//! [`SvgRenderer`] accumulates markup into a `String`. The primitives here
//! know about the theme (class names, hand-drawn jitter); the per-kind
//! emitters in [`crate::emit`] compose them. All user-supplied text goes
//! through [`escape_xml`] before it reaches the output.

use crate::RenderOptions;
use crate::jitter::{wobbly_line_path, wobbly_rect_path};
use crate::theme::Theme;
use std::fmt::Write;
use wiremark_layout::Rect;
use wiremark_layout::metrics::CHAR_WIDTH;

pub(crate) struct SvgRenderer<'a> {
    pub(crate) out: String,
    pub(crate) theme: &'a Theme,
    pub(crate) canvas: Rect,
}

impl<'a> SvgRenderer<'a> {
    pub(crate) fn new(theme: &'a Theme, canvas: Rect) -> Self {
        Self {
            out: String::with_capacity(4096),
            theme,
            canvas,
        }
    }

    /// Emit the `<svg>` root, accessibility metadata, the theme's style
    /// block and the page background.
    pub(crate) fn open(&mut self, options: &RenderOptions) {
        let mut root_attrs = String::new();
        if options.accessible {
            root_attrs.push_str(r#" role="img""#);
            let label = options
                .title
                .as_deref()
                .unwrap_or("wireframe");
            let _ = write!(root_attrs, r#" aria-label="{}""#, escape_xml(label));
        }
        if let Some(lang) = &options.lang {
            let _ = write!(root_attrs, r#" lang="{}""#, escape_xml(lang));
        }
        let _ = writeln!(
            self.out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.2} {:.2}" data-theme="{}"{}>"#,
            self.canvas.width,
            self.canvas.height,
            self.canvas.width,
            self.canvas.height,
            escape_xml(&self.theme.name),
            root_attrs,
        );
        if let Some(title) = &options.title {
            let _ = writeln!(self.out, "  <title>{}</title>", escape_xml(title));
        }
        if let Some(description) = &options.description {
            let _ = writeln!(self.out, "  <desc>{}</desc>", escape_xml(description));
        }
        self.style_block();
        if self.theme.shadows {
            self.out.push_str(
                "  <defs>\n    <filter id=\"wm-shadow\" x=\"-20%\" y=\"-20%\" width=\"140%\" height=\"140%\">\n      <feDropShadow dx=\"0\" dy=\"2\" stdDeviation=\"3\" flood-opacity=\"0.25\"/>\n    </filter>\n  </defs>\n",
            );
        }
        let _ = writeln!(
            self.out,
            r#"  <rect x="0" y="0" width="{:.2}" height="{:.2}" class="wm-bg"/>"#,
            self.canvas.width, self.canvas.height,
        );
    }

    /// Close the root element and hand the finished markup back.
    pub(crate) fn finish(mut self) -> String {
        self.out.push_str("</svg>\n");
        self.out
    }

    /// Class rules derived from the theme tokens. Emitters reference these
    /// classes and never inline colors, so a theme swap touches only this
    /// block.
    fn style_block(&mut self) {
        let t = self.theme;
        let _ = writeln!(self.out, "  <style>");
        let _ = writeln!(
            self.out,
            "    text {{ font-family: {}; font-size: {}px; fill: {}; }}",
            t.font_family, t.font_size, t.text,
        );
        let _ = writeln!(
            self.out,
            "    .wm-heading {{ font-size: {}px; font-weight: 600; }}",
            t.heading_size,
        );
        let _ = writeln!(
            self.out,
            "    .wm-small {{ font-size: {}px; }}",
            t.small_size,
        );
        let _ = writeln!(self.out, "    .wm-muted {{ fill: {}; }}", t.muted);
        let _ = writeln!(
            self.out,
            "    .wm-link {{ fill: {}; text-decoration: underline; }}",
            t.accent,
        );
        let _ = writeln!(
            self.out,
            "    .wm-primary-text {{ fill: {}; }}",
            t.primary_text,
        );
        let _ = writeln!(self.out, "    .wm-bg {{ fill: {}; }}", t.background);
        let _ = writeln!(
            self.out,
            "    .wm-surface {{ fill: {}; stroke: {}; stroke-width: {}; }}",
            t.surface, t.border, t.stroke_width,
        );
        let _ = writeln!(
            self.out,
            "    .wm-frame {{ fill: none; stroke: {}; stroke-width: {}; }}",
            t.border, t.stroke_width,
        );
        let _ = writeln!(
            self.out,
            "    .wm-primary {{ fill: {}; stroke: none; }}",
            t.primary,
        );
        let _ = writeln!(
            self.out,
            "    .wm-track {{ fill: {}; stroke: none; }}",
            t.track,
        );
        let _ = writeln!(
            self.out,
            "    .wm-muted-fill {{ fill: {}; stroke: none; }}",
            t.muted,
        );
        let _ = writeln!(
            self.out,
            "    .wm-stroke {{ fill: none; stroke: {}; stroke-width: {}; }}",
            t.border, t.stroke_width,
        );
        let _ = writeln!(
            self.out,
            "    .wm-muted-stroke {{ fill: none; stroke: {}; stroke-width: 1; }}",
            t.muted,
        );
        let _ = writeln!(
            self.out,
            "    .wm-primary-stroke {{ fill: none; stroke: {}; stroke-width: 2; stroke-linecap: round; }}",
            t.primary,
        );
        let _ = writeln!(
            self.out,
            "    .wm-accent-stroke {{ fill: none; stroke: {}; stroke-width: 2; }}",
            t.accent,
        );
        let _ = writeln!(
            self.out,
            "    .wm-placeholder {{ fill: none; stroke: {}; stroke-width: {}; stroke-dasharray: 6 4; }}",
            t.muted, t.stroke_width,
        );
        let _ = writeln!(self.out, "    .wm-scrim {{ fill: {}; }}", t.scrim);
        let _ = writeln!(self.out, "    .wm-disabled {{ opacity: 0.45; }}");
        if t.shadows {
            let _ = writeln!(
                self.out,
                "    .wm-shadowed {{ filter: url(#wm-shadow); }}",
            );
        }
        let _ = writeln!(self.out, "  </style>");
    }

    // ====== Primitives ======

    /// A themed box. Hand-drawn themes emit a wobbly path, others a `<rect>`
    /// with the theme radius.
    pub(crate) fn box_shape(&mut self, rect: Rect, class: &str) {
        self.rounded_box(rect, self.theme.radius, class);
    }

    /// A box with an explicit corner radius (pills, strips).
    pub(crate) fn rounded_box(&mut self, rect: Rect, radius: f64, class: &str) {
        if self.theme.hand_drawn {
            let d = wobbly_rect_path(rect.x, rect.y, rect.width, rect.height, self.theme.jitter);
            let _ = writeln!(self.out, r#"  <path d="{d}" class="{class}"/>"#);
        } else {
            let _ = writeln!(
                self.out,
                r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="{:.2}" class="{class}"/>"#,
                rect.x, rect.y, rect.width, rect.height, radius,
            );
        }
    }

    /// A themed line. Hand-drawn themes bow the midpoint.
    pub(crate) fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, class: &str) {
        if self.theme.hand_drawn {
            let d = wobbly_line_path(x1, y1, x2, y2, self.theme.jitter);
            let _ = writeln!(self.out, r#"  <path d="{d}" class="{class}"/>"#);
        } else {
            let _ = writeln!(
                self.out,
                r#"  <line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" class="{class}"/>"#,
            );
        }
    }

    /// Circles stay round even in the hand-drawn theme; the wobble lives in
    /// boxes and lines.
    pub(crate) fn circle(&mut self, cx: f64, cy: f64, r: f64, class: &str) {
        let _ = writeln!(
            self.out,
            r#"  <circle cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}" class="{class}"/>"#,
        );
    }

    /// Raw path data with a class; callers build the `d` string themselves.
    pub(crate) fn path(&mut self, d: &str, class: &str) {
        let _ = writeln!(self.out, r#"  <path d="{d}" class="{class}"/>"#);
    }

    /// Escaped text vertically centered on `y`.
    pub(crate) fn text(&mut self, x: f64, y: f64, anchor: &str, class: &str, content: &str) {
        if content.is_empty() {
            return;
        }
        let _ = writeln!(
            self.out,
            r#"  <text x="{x:.2}" y="{y:.2}" text-anchor="{anchor}" dominant-baseline="middle" class="{class}">{}</text>"#,
            escape_xml(content),
        );
    }
}

/// Truncate to what fits in `max_width` using the layout text estimate,
/// with a trailing ellipsis.
pub(crate) fn fit_text(content: &str, max_width: f64) -> String {
    let budget = (max_width / CHAR_WIDTH).floor().max(1.0) as usize;
    if content.chars().count() <= budget {
        return content.to_string();
    }
    let mut out: String = content.chars().take(budget.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Minimal XML escaping for text nodes and attribute values.
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
