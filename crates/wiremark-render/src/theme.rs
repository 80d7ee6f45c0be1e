//! Theme tokens.
//!
//! A [`Theme`] is a flat value of color, typography and shape tokens; the
//! emitters read tokens and never branch on the theme name, so swapping
//! themes changes numbers and strings but no drawing logic. The four
//! built-ins mirror the document-level `wireframe <style>` words. Custom
//! themes are ordinary values built by the caller and passed in render
//! options; there is no registry.

use wiremark_ast::StyleName;

/// Visual tokens consumed by the SVG emitters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Theme {
    /// Name reported in the SVG root's `data-theme` attribute
    pub name: String,

    // ====== Colors ======
    /// Page background
    pub background: String,
    /// Widget and section fill
    pub surface: String,
    /// Outline strokes
    pub border: String,
    /// Primary text
    pub text: String,
    /// Secondary text, placeholders, glyph strokes
    pub muted: String,
    /// Emphasis fill (primary buttons, active tab underline, progress)
    pub primary: String,
    /// Text on primary fills
    pub primary_text: String,
    /// Links and selection accents
    pub accent: String,
    /// Track fills behind sliders, progress bars, scrollbars
    pub track: String,
    /// Modal backdrop, with alpha
    pub scrim: String,

    // ====== Typography ======
    pub font_family: String,
    /// Body size in px
    pub font_size: f64,
    pub heading_size: f64,
    pub small_size: f64,

    // ====== Shape ======
    /// Corner radius for boxes
    pub radius: f64,
    pub stroke_width: f64,
    /// Draw a drop shadow under cards, modals and menus
    pub shadows: bool,

    // ====== Hand-drawn ======
    /// Replace straight rects and lines with wobbly paths
    pub hand_drawn: bool,
    /// Maximum jitter offset in px, only read when `hand_drawn` is set
    pub jitter: f64,
}

impl Theme {
    /// Look up a built-in theme by its style word.
    pub fn named(name: &str) -> Option<Theme> {
        StyleName::parse(name).map(Theme::for_style)
    }

    /// The built-in theme matching a document's declared style.
    pub fn for_style(style: StyleName) -> Theme {
        match style {
            StyleName::Sketch => Theme::sketch(),
            StyleName::Blueprint => Theme::blueprint(),
            StyleName::Clean => Theme::clean(),
            StyleName::Realistic => Theme::realistic(),
        }
    }

    /// Hand-drawn pencil look; edges wobble deterministically.
    pub fn sketch() -> Theme {
        Theme {
            name: "sketch".to_string(),
            background: "#fdfbf7".to_string(),
            surface: "#ffffff".to_string(),
            border: "#3a3733".to_string(),
            text: "#2b2926".to_string(),
            muted: "#8d877d".to_string(),
            primary: "#3a3733".to_string(),
            primary_text: "#fdfbf7".to_string(),
            accent: "#c74f32".to_string(),
            track: "#eceae4".to_string(),
            scrim: "rgba(43, 41, 38, 0.35)".to_string(),
            font_family: "'Segoe Print', 'Comic Sans MS', cursive".to_string(),
            font_size: 14.0,
            heading_size: 20.0,
            small_size: 11.0,
            radius: 3.0,
            stroke_width: 1.4,
            shadows: false,
            hand_drawn: true,
            jitter: 2.2,
        }
    }

    /// Technical-drawing look, light strokes on dark blue.
    pub fn blueprint() -> Theme {
        Theme {
            name: "blueprint".to_string(),
            background: "#16395c".to_string(),
            surface: "#1d4572".to_string(),
            border: "#a8c6e8".to_string(),
            text: "#e8f1fa".to_string(),
            muted: "#7da3cc".to_string(),
            primary: "#a8c6e8".to_string(),
            primary_text: "#16395c".to_string(),
            accent: "#ffd166".to_string(),
            track: "#24507f".to_string(),
            scrim: "rgba(10, 26, 43, 0.5)".to_string(),
            font_family: "'Courier New', monospace".to_string(),
            font_size: 13.0,
            heading_size: 18.0,
            small_size: 10.0,
            radius: 0.0,
            stroke_width: 1.0,
            shadows: false,
            hand_drawn: false,
            jitter: 0.0,
        }
    }

    /// Minimal grey wireframe.
    pub fn clean() -> Theme {
        Theme {
            name: "clean".to_string(),
            background: "#ffffff".to_string(),
            surface: "#ffffff".to_string(),
            border: "#d0d7de".to_string(),
            text: "#1f2328".to_string(),
            muted: "#656d76".to_string(),
            primary: "#0969da".to_string(),
            primary_text: "#ffffff".to_string(),
            accent: "#0969da".to_string(),
            track: "#eaeef2".to_string(),
            scrim: "rgba(31, 35, 40, 0.4)".to_string(),
            font_family: "-apple-system, 'Segoe UI', Helvetica, sans-serif".to_string(),
            font_size: 14.0,
            heading_size: 20.0,
            small_size: 11.0,
            radius: 6.0,
            stroke_width: 1.0,
            shadows: false,
            hand_drawn: false,
            jitter: 0.0,
        }
    }

    /// Filled, shadowed, product-like look.
    pub fn realistic() -> Theme {
        Theme {
            name: "realistic".to_string(),
            background: "#f3f5f7".to_string(),
            surface: "#ffffff".to_string(),
            border: "#c6ccd4".to_string(),
            text: "#23282e".to_string(),
            muted: "#5b646e".to_string(),
            primary: "#2f6fd6".to_string(),
            primary_text: "#ffffff".to_string(),
            accent: "#7a4fd0".to_string(),
            track: "#e4e8ec".to_string(),
            scrim: "rgba(20, 24, 28, 0.45)".to_string(),
            font_family: "'Segoe UI', Roboto, Helvetica, sans-serif".to_string(),
            font_size: 14.0,
            heading_size: 21.0,
            small_size: 11.0,
            radius: 8.0,
            stroke_width: 1.0,
            shadows: true,
            hand_drawn: false,
            jitter: 0.0,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::sketch()
    }
}
