// Allow unwrap in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! SVG renderer for wiremark documents
//!
//! [`render`] lays the document out at the requested size and walks the
//! resulting tree once, emitting a themed fragment per node. The renderer
//! never fails: anything it cannot draw becomes a dashed placeholder box,
//! and malformed documents render whatever the parser salvaged.
//!
//! Output is a pure function of `(document, options)`. The sketch theme's
//! hand-drawn wobble is seeded from each shape's own geometry, so repeated
//! renders are byte-identical even there.

mod emit;
mod jitter;
mod svg;
mod theme;

pub use theme::Theme;

use svg::SvgRenderer;
use wiremark_ast::Document;
use wiremark_layout::compute_layout_padded;
use wiremark_layout::metrics::DOC_PADDING;

/// How the caller picks the theme, if at all.
#[derive(Clone, Debug)]
pub enum ThemeChoice {
    /// One of the built-in style words (`sketch`, `blueprint`, `clean`,
    /// `realistic`)
    Named(String),
    /// A caller-built token set
    Custom(Theme),
}

/// Options for [`render`].
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Canvas width in px
    pub width: f64,
    /// Canvas height in px
    pub height: f64,
    /// Document padding in px
    pub padding: f64,
    /// Theme override; `None` uses the document's declared style
    pub theme: Option<ThemeChoice>,
    /// Add `role="img"` and an `aria-label` to the root element
    pub accessible: bool,
    /// `<title>` content, also the `aria-label` when `accessible` is set
    pub title: Option<String>,
    /// `<desc>` content
    pub description: Option<String>,
    /// `lang` attribute on the root element
    pub lang: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            padding: DOC_PADDING,
            theme: None,
            accessible: false,
            title: None,
            description: None,
            lang: None,
        }
    }
}

/// Render a parsed document to a self-contained SVG string.
pub fn render(document: &Document, options: &RenderOptions) -> String {
    let theme = resolve_theme(document, options);
    let tree = compute_layout_padded(document, options.width, options.height, options.padding);
    tracing::debug!(
        theme = %theme.name,
        nodes = tree.node_count(),
        "rendering document"
    );

    let mut svg = SvgRenderer::new(&theme, tree.canvas);
    svg.open(options);
    for node in &tree.nodes {
        svg.node(node);
    }
    for node in &tree.overlays {
        svg.overlay(node);
    }
    svg.finish()
}

/// Theme precedence: custom value, then a recognized name, then the
/// document's declared style. An unknown name silently degrades to the
/// document style; `compile`/`validate` report it as a diagnostic.
fn resolve_theme(document: &Document, options: &RenderOptions) -> Theme {
    match &options.theme {
        Some(ThemeChoice::Custom(theme)) => theme.clone(),
        Some(ThemeChoice::Named(name)) => Theme::named(name).unwrap_or_else(|| {
            tracing::debug!(theme = %name, "unknown theme name, using document style");
            Theme::for_style(document.style)
        }),
        None => Theme::for_style(document.style),
    }
}
