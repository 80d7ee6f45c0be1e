//! Size resolution.
//!
//! Every element resolves its width up front (explicit attribute, text
//! estimate, registry default, or context stretch) while heights follow a
//! three-way rule: fixed, grow-at-least, or pure content. Payload-bearing
//! components (tables, trees, lists) size from their row and item counts.

use crate::metrics::{
    CHAR_WIDTH, FRAME_PADDING, HEADER_ROW_HEIGHT, ITEM_HEIGHT, ROW_HEIGHT, TEXT_INSET, TITLE_STRIP,
};
use wiremark_ast::{ChildGrammar, Element, ElementKind, Payload, Scalar, kind_spec};

/// Resolve a dimension scalar: plain numbers are pixels, `"NN%"` strings
/// resolve against `base`.
fn dimension(value: Option<&Scalar>, base: f64) -> Option<f64> {
    match value? {
        Scalar::Number(n) => Some(*n),
        Scalar::Str(s) => {
            let percent: f64 = s.strip_suffix('%')?.trim().parse().ok()?;
            Some(percent / 100.0 * base)
        }
        Scalar::Bool(_) => None,
    }
}

/// Explicit `w=` attribute, resolved against the available width.
pub(crate) fn explicit_width(element: &Element, avail: f64) -> Option<f64> {
    dimension(element.attr("w"), avail).map(|w| w.max(0.0))
}

/// Explicit `h=` attribute, resolved against the available height.
pub(crate) fn explicit_height(element: &Element, avail: f64) -> Option<f64> {
    dimension(element.attr("h"), avail).map(|h| h.max(0.0))
}

/// Width of an element before placement: explicit attribute, then a text
/// estimate for text-sized kinds, then the registry default; a zero default
/// means "fill the available width".
pub(crate) fn natural_width(element: &Element, avail: f64) -> f64 {
    if let Some(w) = explicit_width(element, avail) {
        return w;
    }
    let spec = kind_spec(element.kind);
    let (default_w, _) = spec.default_size;
    if spec.text_sized {
        if let Some(text) = &element.text {
            let text_w = text.chars().count() as f64 * CHAR_WIDTH + 2.0 * TEXT_INSET;
            return text_w.max(default_w);
        }
    }
    if default_w > 0.0 {
        default_w
    } else {
        avail.max(0.0)
    }
}

/// How an element's height is decided.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum HeightRule {
    /// Exactly this, children clip
    Fixed(f64),
    /// At least this, grows with content
    AtLeast(f64),
    /// Whatever the children add up to
    Content,
}

pub(crate) fn height_rule(element: &Element, avail: f64) -> HeightRule {
    if let Some(h) = explicit_height(element, avail) {
        return HeightRule::Fixed(h);
    }
    if let Some(h) = payload_height(element) {
        return HeightRule::Fixed(h);
    }
    let spec = kind_spec(element.kind);
    let (_, default_h) = spec.default_size;
    if default_h <= 0.0 {
        HeightRule::Content
    } else if spec.children == ChildGrammar::Elements {
        // Sections and element-bearing components grow with their content
        HeightRule::AtLeast(default_h)
    } else {
        HeightRule::Fixed(default_h)
    }
}

/// Content-driven height for components with a rows/items payload. Dropdown
/// and Breadcrumb render closed or in one line, so their payload does not
/// change their height.
fn payload_height(element: &Element) -> Option<f64> {
    let title = if element.text.is_some() {
        TITLE_STRIP
    } else {
        0.0
    };
    match (element.kind, &element.payload) {
        (ElementKind::Table | ElementKind::DataGrid, Some(Payload::Table(data))) => {
            let header = if data.has_header {
                HEADER_ROW_HEIGHT
            } else {
                0.0
            };
            Some(title + header + data.rows.len() as f64 * ROW_HEIGHT + 2.0 * FRAME_PADDING)
        }
        (ElementKind::Tree, Some(Payload::Tree(items))) => {
            Some(title + items.len() as f64 * ITEM_HEIGHT + 2.0 * FRAME_PADDING)
        }
        (ElementKind::List, Some(Payload::Items(items))) => {
            Some(title + items.len() as f64 * ITEM_HEIGHT + 2.0 * FRAME_PADDING)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremark_ast::{SourceLocation, SourceSpan, TableData};

    fn element(kind: ElementKind) -> Element {
        Element::new(kind, SourceSpan::point(SourceLocation::origin()))
    }

    #[test]
    fn explicit_width_beats_everything() {
        let mut button = element(ElementKind::Button);
        button.text = Some("a very long label indeed".to_string());
        button
            .attributes
            .insert("w".to_string(), Scalar::Number(50.0));
        assert_eq!(natural_width(&button, 800.0), 50.0);
    }

    #[test]
    fn percent_widths_resolve_against_available() {
        let mut panel = element(ElementKind::Panel);
        panel
            .attributes
            .insert("w".to_string(), Scalar::Str("50%".to_string()));
        assert_eq!(natural_width(&panel, 600.0), 300.0);
    }

    #[test]
    fn text_widens_sized_controls_with_a_floor() {
        let mut button = element(ElementKind::Button);
        assert_eq!(natural_width(&button, 800.0), 110.0, "default width");

        button.text = Some("OK".to_string());
        assert_eq!(
            natural_width(&button, 800.0),
            110.0,
            "short text stays at the floor"
        );

        button.text = Some("Download quarterly report".to_string());
        let expected = 25.0 * CHAR_WIDTH + 2.0 * TEXT_INSET;
        assert_eq!(natural_width(&button, 800.0), expected);
    }

    #[test]
    fn zero_default_width_fills_available() {
        let vertical = element(ElementKind::Vertical);
        assert_eq!(natural_width(&vertical, 640.0), 640.0);
    }

    #[test]
    fn sections_grow_while_controls_stay_fixed() {
        assert_eq!(
            height_rule(&element(ElementKind::Card), 600.0),
            HeightRule::AtLeast(180.0)
        );
        assert_eq!(
            height_rule(&element(ElementKind::Button), 600.0),
            HeightRule::Fixed(36.0)
        );
        assert_eq!(
            height_rule(&element(ElementKind::Vertical), 600.0),
            HeightRule::Content
        );
    }

    #[test]
    fn table_height_counts_rows() {
        let mut table = element(ElementKind::Table);
        table.payload = Some(Payload::Table(TableData {
            columns: vec!["a".to_string()],
            rows: vec![vec!["1".to_string()], vec!["2".to_string()]],
            has_header: true,
        }));
        let expected = HEADER_ROW_HEIGHT + 2.0 * ROW_HEIGHT + 2.0 * FRAME_PADDING;
        assert_eq!(height_rule(&table, 600.0), HeightRule::Fixed(expected));
    }

    #[test]
    fn titled_list_reserves_the_title_strip() {
        let mut list = element(ElementKind::List);
        list.text = Some("Files".to_string());
        list.payload = Some(Payload::Items(vec!["a.txt".to_string()]));
        let expected = TITLE_STRIP + ITEM_HEIGHT + 2.0 * FRAME_PADDING;
        assert_eq!(height_rule(&list, 600.0), HeightRule::Fixed(expected));
    }
}
