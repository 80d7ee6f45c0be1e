//! Wireframe document nodes
//!
//! All nodes are created by the parser and immutable afterwards. The layout
//! engine never mutates them; it produces a separate tree of boxes, so one
//! parsed document can be laid out repeatedly at different viewport sizes.

use crate::kind::{DockPosition, ElementKind, kind_spec};
use crate::location::SourceSpan;
use crate::scalar::Scalar;
use indexmap::IndexMap;
use std::fmt;

// =============================================================================
// Document
// =============================================================================

/// The four built-in visual styles a document can declare.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum StyleName {
    /// Hand-drawn look with deterministic edge jitter
    #[default]
    Sketch,
    /// Dark blue technical-drawing look
    Blueprint,
    /// Minimal grey look
    Clean,
    /// Filled, shadowed, product-like look
    Realistic,
}

impl StyleName {
    /// Parse a style word from the `wireframe <style>` wrapper.
    pub fn parse(word: &str) -> Option<StyleName> {
        match word {
            "sketch" => Some(StyleName::Sketch),
            "blueprint" => Some(StyleName::Blueprint),
            "clean" => Some(StyleName::Clean),
            "realistic" => Some(StyleName::Realistic),
            _ => None,
        }
    }

    /// Source-level name of this style.
    pub fn name(self) -> &'static str {
        match self {
            StyleName::Sketch => "sketch",
            StyleName::Blueprint => "blueprint",
            StyleName::Clean => "clean",
            StyleName::Realistic => "realistic",
        }
    }
}

impl fmt::Display for StyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Root of a parsed wireframe source file.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Document {
    /// Declared style, `sketch` when the wrapper omits one
    pub style: StyleName,

    /// `%name: value` document attributes, in source order
    pub attributes: IndexMap<String, Scalar>,

    /// Top-level elements, in source order
    pub children: Vec<Element>,

    /// Trailing `data`/`validations`/... blocks; parsed, never laid out
    pub data_sections: Vec<DataSection>,

    /// Whole-document source range
    pub span: SourceSpan,
}

impl Document {
    /// Create an empty document with the default style.
    pub fn new(span: SourceSpan) -> Self {
        Self {
            style: StyleName::default(),
            attributes: IndexMap::new(),
            children: Vec::new(),
            data_sections: Vec::new(),
            span,
        }
    }

    /// True when the document has no elements and no data sections.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.data_sections.is_empty()
    }
}

// =============================================================================
// Elements
// =============================================================================

/// Named boolean flags attached to an element (`Button "Save" primary`).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
#[serde(default)]
pub struct Modifiers {
    pub primary: bool,
    pub secondary: bool,
    pub required: bool,
    pub disabled: bool,
    pub checked: bool,
    pub selected: bool,
    pub readonly: bool,
    pub editable: bool,
    pub active: bool,
    pub expanded: bool,
    // Component-specific flags
    pub sortable: bool,
    pub striped: bool,
    pub searchable: bool,
    pub collapsed: bool,
    pub loading: bool,
}

impl Modifiers {
    /// Set the named flag. Returns false when the name is not a known
    /// modifier, so the parser can report it.
    pub fn set(&mut self, name: &str) -> bool {
        let flag = match name {
            "primary" => &mut self.primary,
            "secondary" => &mut self.secondary,
            "required" => &mut self.required,
            "disabled" => &mut self.disabled,
            "checked" => &mut self.checked,
            "selected" => &mut self.selected,
            "readonly" => &mut self.readonly,
            "editable" => &mut self.editable,
            "active" => &mut self.active,
            "expanded" => &mut self.expanded,
            "sortable" => &mut self.sortable,
            "striped" => &mut self.striped,
            "searchable" => &mut self.searchable,
            "collapsed" => &mut self.collapsed,
            "loading" => &mut self.loading,
            _ => return false,
        };
        *flag = true;
        true
    }
}

/// Specialized children payloads for components whose grammar is not nested
/// elements.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Payload {
    /// Table / DataGrid rows
    Table(TableData),
    /// Tree items with nesting depth
    Tree(Vec<TreeItem>),
    /// List / Breadcrumb items, Dropdown options
    Items(Vec<String>),
}

/// Rows collected from `| a | b |` lines.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TableData {
    /// Header cells, empty when the table has no header row
    pub columns: Vec<String>,

    /// Body rows; ragged rows are allowed and padded at render time
    pub rows: Vec<Vec<String>>,

    /// True when a `|---|` separator marked the first row as a header
    pub has_header: bool,
}

/// One `+ branch` or `- leaf` line inside a Tree.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TreeItem {
    /// Item label, rest of the marker line
    pub text: String,

    /// Nesting depth below the Tree component, 0 for top-level items
    pub depth: u32,

    /// `+` lines are branches, `-` lines are leaves
    pub is_branch: bool,
}

/// One element in the document tree.
///
/// The struct is uniform across kinds; which fields are meaningful depends on
/// the kind's registry entry. Unused fields stay at their defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Element {
    /// What this element is
    pub kind: ElementKind,

    /// Leading string literal: text for controls, title for sections, the
    /// condition word for `if`
    pub text: Option<String>,

    /// `:name` identifier, unique per document (violations are reported)
    pub id: Option<String>,

    /// `?path` data-binding annotation
    pub binding: Option<String>,

    /// `@target` navigation annotation
    pub navigation: Option<String>,

    /// `$name` icon annotation
    pub icon: Option<String>,

    /// `key=value` attributes, in source order
    pub attributes: IndexMap<String, Scalar>,

    /// Boolean flags
    pub modifiers: Modifiers,

    /// Nested child elements (empty for specialized grammars)
    pub children: Vec<Element>,

    /// Specialized children (table rows, tree items, list items)
    pub payload: Option<Payload>,

    /// Source range from keyword to end of children block
    pub span: SourceSpan,
}

impl Element {
    /// Create an element of a kind with everything else empty.
    pub fn new(kind: ElementKind, span: SourceSpan) -> Self {
        Self {
            kind,
            text: None,
            id: None,
            binding: None,
            navigation: None,
            icon: None,
            attributes: IndexMap::new(),
            modifiers: Modifiers::default(),
            children: Vec::new(),
            payload: None,
            span,
        }
    }

    /// Attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&Scalar> {
        self.attributes.get(name)
    }

    /// Numeric attribute by name.
    pub fn number_attr(&self, name: &str) -> Option<f64> {
        self.attr(name).and_then(Scalar::as_number)
    }

    /// String attribute by name.
    pub fn string_attr(&self, name: &str) -> Option<&str> {
        self.attr(name).and_then(Scalar::as_str)
    }

    /// Resolved dock position: explicit `dock=` attribute when present and
    /// recognized, else the registry default for the kind. `None` means the
    /// element does not dock to an edge (treated as fill).
    pub fn dock(&self) -> Option<DockPosition> {
        if let Some(word) = self.string_attr("dock") {
            // Unrecognized dock words fall through to the kind default;
            // the parser has already warned about them.
            if let Some(pos) = DockPosition::parse(word) {
                return Some(pos);
            }
        }
        kind_spec(self.kind).default_dock
    }
}

// =============================================================================
// Data sections
// =============================================================================

/// The five out-of-band metadata block kinds.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DataSectionKind {
    Data,
    Validations,
    Calculations,
    Rules,
    Fields,
}

impl DataSectionKind {
    /// Parse a data-section keyword (lowercase, at top level).
    pub fn parse(word: &str) -> Option<DataSectionKind> {
        match word {
            "data" => Some(DataSectionKind::Data),
            "validations" => Some(DataSectionKind::Validations),
            "calculations" => Some(DataSectionKind::Calculations),
            "rules" => Some(DataSectionKind::Rules),
            "fields" => Some(DataSectionKind::Fields),
            _ => None,
        }
    }

    /// Source-level name of this section kind.
    pub fn name(self) -> &'static str {
        match self {
            DataSectionKind::Data => "data",
            DataSectionKind::Validations => "validations",
            DataSectionKind::Calculations => "calculations",
            DataSectionKind::Rules => "rules",
            DataSectionKind::Fields => "fields",
        }
    }
}

impl fmt::Display for DataSectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One trailing metadata block: tabular rows attached to the document, not
/// to the element tree.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DataSection {
    /// Which block keyword introduced it
    pub kind: DataSectionKind,

    /// Optional dataset name (`data "Users"`)
    pub name: Option<String>,

    /// Header cells, empty without a separator row
    pub columns: Vec<String>,

    /// Body rows
    pub rows: Vec<Vec<String>>,

    /// Source range of the block
    pub span: SourceSpan,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::{SourceLocation, SourceSpan};

    fn span() -> SourceSpan {
        SourceSpan::point(SourceLocation::origin())
    }

    #[test]
    fn style_parse_rejects_unknown_words() {
        assert_eq!(StyleName::parse("clean"), Some(StyleName::Clean));
        assert_eq!(StyleName::parse("Clean"), None);
        assert_eq!(StyleName::parse("neon"), None);
    }

    #[test]
    fn default_style_is_sketch() {
        assert_eq!(StyleName::default(), StyleName::Sketch);
    }

    #[test]
    fn modifiers_set_reports_unknown_names() {
        let mut mods = Modifiers::default();
        assert!(mods.set("primary"));
        assert!(mods.set("disabled"));
        assert!(!mods.set("blinking"));
        assert!(mods.primary);
        assert!(mods.disabled);
        assert!(!mods.checked);
    }

    #[test]
    fn explicit_dock_attribute_wins_over_kind_default() {
        let mut header = Element::new(ElementKind::Header, span());
        assert_eq!(header.dock(), Some(DockPosition::Top));

        header.attributes.insert(
            "dock".to_string(),
            Scalar::Str("bottom".to_string()),
        );
        assert_eq!(header.dock(), Some(DockPosition::Bottom));
    }

    #[test]
    fn unrecognized_dock_value_falls_back_to_kind_default() {
        let mut sidebar = Element::new(ElementKind::Sidebar, span());
        sidebar
            .attributes
            .insert("dock".to_string(), Scalar::Str("sideways".to_string()));
        assert_eq!(sidebar.dock(), Some(DockPosition::Left));
    }

    #[test]
    fn attribute_accessors_match_scalar_shape() {
        let mut el = Element::new(ElementKind::Button, span());
        el.attributes
            .insert("w".to_string(), Scalar::Number(240.0));
        el.attributes
            .insert("justify".to_string(), Scalar::Str("between".to_string()));

        assert_eq!(el.number_attr("w"), Some(240.0));
        assert_eq!(el.string_attr("justify"), Some("between"));
        assert_eq!(el.number_attr("justify"), None);
        assert_eq!(el.attr("missing"), None);
    }

    #[test]
    fn data_section_keywords_round_trip() {
        for kind in [
            DataSectionKind::Data,
            DataSectionKind::Validations,
            DataSectionKind::Calculations,
            DataSectionKind::Rules,
            DataSectionKind::Fields,
        ] {
            assert_eq!(DataSectionKind::parse(kind.name()), Some(kind));
        }
        assert_eq!(DataSectionKind::parse("metadata"), None);
    }
}
