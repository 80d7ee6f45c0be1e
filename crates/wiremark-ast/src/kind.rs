//! Element kinds and the keyword registry
//!
//! Every element the language knows is described by one [`KindSpec`] entry in
//! [`KIND_SPECS`]. The lexer resolves bare words to keywords through this
//! table, the parser picks the children grammar from it, the layout engine
//! reads default sizes and dock positions from it, and the renderer uses the
//! keyword for placeholder labels. Adding a widget is one new enum variant
//! plus one table entry, not a code path in four crates.
//!
//! The table is index-aligned with the [`ElementKind`] discriminants so kind
//! lookup is a direct array index; `keyword_spec` is the case-sensitive
//! name lookup used during lexing.

use std::fmt;

/// Every element kind the language recognizes.
///
/// Discriminants index into [`KIND_SPECS`]; keep the two in the same order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[repr(u16)]
pub enum ElementKind {
    // Layout containers
    Grid = 0,
    Vertical,
    Horizontal,
    Dock,
    Canvas,
    Scroll,

    // Sections
    Header,
    Footer,
    Sidebar,
    Content,
    Panel,
    Card,
    Toolbar,
    StatusBar,
    Modal,
    Drawer,

    // Controls
    Button,
    TextInput,
    TextArea,
    SearchInput,
    PasswordInput,
    NumberInput,
    DatePicker,
    FilePicker,
    Label,
    Heading,
    Link,
    Checkbox,
    Radio,
    Toggle,
    Slider,
    Dropdown,
    ProgressBar,
    Spinner,
    Image,
    Icon,
    Avatar,
    Badge,
    Divider,
    Spacer,

    // Components
    Tabs,
    Tab,
    Table,
    DataGrid,
    Tree,
    List,
    Accordion,
    Breadcrumb,
    Menu,
    Navbar,
    Pagination,
    Chart,
    Form,
    ButtonGroup,

    // Structural
    Repeat,
    Conditional,
}

/// Broad grouping of element kinds; drives layout and render defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Category {
    /// Arranges children, draws nothing itself
    Container,
    /// Chrome region with a frame (Header, Sidebar, Card, ...)
    Section,
    /// Leaf-ish widget (Button, TextInput, ...)
    Control,
    /// Composite widget with specialized children (Tabs, Table, ...)
    Component,
    /// Repeat and Conditional; expanded away during layout
    Structural,
}

/// What an element's indented children block contains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ChildGrammar {
    /// Nested elements
    Elements,
    /// `| cell | cell |` rows and `|---|` separators
    TableRows,
    /// `+ branch` / `- leaf` lines, nested by indentation
    TreeItems,
    /// `- item` lines
    ListItems,
    /// No children expected; a block is parsed but warned about
    None,
}

/// Where a child consumes space inside a Dock container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DockPosition {
    Top,
    Bottom,
    Left,
    Right,
    Fill,
}

impl DockPosition {
    /// Parse a `dock=` attribute value.
    pub fn parse(word: &str) -> Option<DockPosition> {
        match word {
            "top" => Some(DockPosition::Top),
            "bottom" => Some(DockPosition::Bottom),
            "left" => Some(DockPosition::Left),
            "right" => Some(DockPosition::Right),
            "fill" => Some(DockPosition::Fill),
            _ => None,
        }
    }
}

/// Registry entry describing one element kind.
#[derive(Clone, Copy, Debug)]
pub struct KindSpec {
    /// Source keyword, case-sensitive
    pub keyword: &'static str,

    /// The kind this entry describes
    pub kind: ElementKind,

    /// Broad grouping
    pub category: Category,

    /// Children grammar the parser applies after an INDENT
    pub children: ChildGrammar,

    /// Default width/height; 0.0 means "resolved from context or content"
    pub default_size: (f64, f64),

    /// Width grows with text length (Button, Label, ...)
    pub text_sized: bool,

    /// Edge this kind docks to by default inside a Dock container
    pub default_dock: Option<DockPosition>,

    /// Stretches across the cross axis by default in Vertical/Horizontal
    pub stretch: bool,
}

impl KindSpec {
    const fn with_dock(mut self, dock: DockPosition) -> Self {
        self.default_dock = Some(dock);
        self
    }

    const fn with_stretch(mut self) -> Self {
        self.stretch = true;
        self
    }
}

const fn container(keyword: &'static str, kind: ElementKind) -> KindSpec {
    KindSpec {
        keyword,
        kind,
        category: Category::Container,
        children: ChildGrammar::Elements,
        default_size: (0.0, 0.0),
        text_sized: false,
        default_dock: None,
        stretch: true,
    }
}

const fn section(keyword: &'static str, kind: ElementKind, w: f64, h: f64) -> KindSpec {
    KindSpec {
        keyword,
        kind,
        category: Category::Section,
        children: ChildGrammar::Elements,
        default_size: (w, h),
        text_sized: false,
        default_dock: None,
        stretch: true,
    }
}

const fn control(keyword: &'static str, kind: ElementKind, w: f64, h: f64) -> KindSpec {
    KindSpec {
        keyword,
        kind,
        category: Category::Control,
        children: ChildGrammar::None,
        default_size: (w, h),
        text_sized: false,
        default_dock: None,
        stretch: false,
    }
}

const fn text_control(keyword: &'static str, kind: ElementKind, w: f64, h: f64) -> KindSpec {
    let mut spec = control(keyword, kind, w, h);
    spec.text_sized = true;
    spec
}

const fn component(
    keyword: &'static str,
    kind: ElementKind,
    w: f64,
    h: f64,
    children: ChildGrammar,
) -> KindSpec {
    KindSpec {
        keyword,
        kind,
        category: Category::Component,
        children,
        default_size: (w, h),
        text_sized: false,
        default_dock: None,
        stretch: false,
    }
}

const fn structural(keyword: &'static str, kind: ElementKind) -> KindSpec {
    KindSpec {
        keyword,
        kind,
        category: Category::Structural,
        children: ChildGrammar::Elements,
        default_size: (0.0, 0.0),
        text_sized: false,
        default_dock: None,
        stretch: false,
    }
}

/// The registry. Index-aligned with [`ElementKind`] discriminants.
pub const KIND_SPECS: &[KindSpec] = &[
    // === Layout containers ===
    container("Grid", ElementKind::Grid),
    container("Vertical", ElementKind::Vertical),
    container("Horizontal", ElementKind::Horizontal),
    container("Dock", ElementKind::Dock),
    container("Canvas", ElementKind::Canvas),
    container("Scroll", ElementKind::Scroll),
    // === Sections ===
    section("Header", ElementKind::Header, 0.0, 64.0).with_dock(DockPosition::Top),
    section("Footer", ElementKind::Footer, 0.0, 56.0).with_dock(DockPosition::Bottom),
    section("Sidebar", ElementKind::Sidebar, 220.0, 0.0).with_dock(DockPosition::Left),
    section("Content", ElementKind::Content, 0.0, 0.0),
    section("Panel", ElementKind::Panel, 0.0, 0.0),
    section("Card", ElementKind::Card, 280.0, 180.0),
    section("Toolbar", ElementKind::Toolbar, 0.0, 44.0).with_dock(DockPosition::Top),
    section("StatusBar", ElementKind::StatusBar, 0.0, 28.0).with_dock(DockPosition::Bottom),
    section("Modal", ElementKind::Modal, 0.0, 0.0),
    section("Drawer", ElementKind::Drawer, 300.0, 0.0),
    // === Controls ===
    text_control("Button", ElementKind::Button, 110.0, 36.0),
    control("TextInput", ElementKind::TextInput, 200.0, 36.0),
    control("TextArea", ElementKind::TextArea, 280.0, 90.0),
    control("SearchInput", ElementKind::SearchInput, 220.0, 36.0),
    control("PasswordInput", ElementKind::PasswordInput, 200.0, 36.0),
    control("NumberInput", ElementKind::NumberInput, 120.0, 36.0),
    control("DatePicker", ElementKind::DatePicker, 160.0, 36.0),
    control("FilePicker", ElementKind::FilePicker, 200.0, 36.0),
    text_control("Label", ElementKind::Label, 80.0, 20.0),
    text_control("Heading", ElementKind::Heading, 200.0, 32.0),
    text_control("Link", ElementKind::Link, 60.0, 20.0),
    text_control("Checkbox", ElementKind::Checkbox, 140.0, 24.0),
    text_control("Radio", ElementKind::Radio, 140.0, 24.0),
    text_control("Toggle", ElementKind::Toggle, 140.0, 24.0),
    control("Slider", ElementKind::Slider, 200.0, 24.0),
    {
        let mut spec = control("Dropdown", ElementKind::Dropdown, 180.0, 36.0);
        spec.children = ChildGrammar::ListItems;
        spec
    },
    control("ProgressBar", ElementKind::ProgressBar, 200.0, 12.0),
    control("Spinner", ElementKind::Spinner, 32.0, 32.0),
    control("Image", ElementKind::Image, 200.0, 150.0),
    control("Icon", ElementKind::Icon, 24.0, 24.0),
    control("Avatar", ElementKind::Avatar, 40.0, 40.0),
    text_control("Badge", ElementKind::Badge, 56.0, 22.0),
    control("Divider", ElementKind::Divider, 0.0, 9.0).with_stretch(),
    control("Spacer", ElementKind::Spacer, 16.0, 16.0),
    // === Components ===
    component("Tabs", ElementKind::Tabs, 320.0, 200.0, ChildGrammar::Elements),
    {
        let mut spec = component("Tab", ElementKind::Tab, 90.0, 32.0, ChildGrammar::Elements);
        spec.text_sized = true;
        spec
    },
    component("Table", ElementKind::Table, 360.0, 160.0, ChildGrammar::TableRows),
    component("DataGrid", ElementKind::DataGrid, 420.0, 220.0, ChildGrammar::TableRows),
    component("Tree", ElementKind::Tree, 220.0, 180.0, ChildGrammar::TreeItems),
    component("List", ElementKind::List, 220.0, 140.0, ChildGrammar::ListItems),
    component("Accordion", ElementKind::Accordion, 280.0, 180.0, ChildGrammar::Elements),
    component("Breadcrumb", ElementKind::Breadcrumb, 280.0, 24.0, ChildGrammar::ListItems),
    component("Menu", ElementKind::Menu, 180.0, 160.0, ChildGrammar::Elements),
    component("Navbar", ElementKind::Navbar, 0.0, 48.0, ChildGrammar::Elements)
        .with_dock(DockPosition::Top)
        .with_stretch(),
    component("Pagination", ElementKind::Pagination, 240.0, 32.0, ChildGrammar::None),
    component("Chart", ElementKind::Chart, 320.0, 200.0, ChildGrammar::None),
    component("Form", ElementKind::Form, 320.0, 0.0, ChildGrammar::Elements),
    component("ButtonGroup", ElementKind::ButtonGroup, 240.0, 36.0, ChildGrammar::Elements),
    // === Structural ===
    structural("repeat", ElementKind::Repeat),
    structural("if", ElementKind::Conditional),
];

/// Look up the registry entry for a kind. Direct index by discriminant.
pub fn kind_spec(kind: ElementKind) -> &'static KindSpec {
    let spec = &KIND_SPECS[kind as usize];
    debug_assert_eq!(spec.kind, kind, "KIND_SPECS out of order");
    spec
}

/// Resolve a bare source word to a registry entry, case-sensitively.
pub fn keyword_spec(word: &str) -> Option<&'static KindSpec> {
    KIND_SPECS.iter().find(|spec| spec.keyword == word)
}

impl ElementKind {
    /// Source keyword for this kind.
    pub fn keyword(self) -> &'static str {
        kind_spec(self).keyword
    }

    /// Broad grouping of this kind.
    pub fn category(self) -> Category {
        kind_spec(self).category
    }

    pub fn is_container(self) -> bool {
        matches!(self.category(), Category::Container)
    }

    pub fn is_section(self) -> bool {
        matches!(self.category(), Category::Section)
    }

    pub fn is_control(self) -> bool {
        matches!(self.category(), Category::Control)
    }

    pub fn is_component(self) -> bool {
        matches!(self.category(), Category::Component)
    }

    /// Modal and Drawer overlay the viewport instead of flowing with
    /// siblings.
    pub fn is_overlay(self) -> bool {
        matches!(self, ElementKind::Modal | ElementKind::Drawer)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_is_index_aligned_with_discriminants() {
        for (index, spec) in KIND_SPECS.iter().enumerate() {
            assert_eq!(
                spec.kind as usize, index,
                "entry '{}' out of order",
                spec.keyword
            );
        }
    }

    #[test]
    fn keywords_are_unique() {
        let mut seen = HashSet::new();
        for spec in KIND_SPECS {
            assert!(seen.insert(spec.keyword), "duplicate keyword {}", spec.keyword);
        }
    }

    #[test]
    fn keyword_lookup_is_case_sensitive() {
        assert!(keyword_spec("Button").is_some());
        assert!(keyword_spec("button").is_none());
        assert!(keyword_spec("BUTTON").is_none());
    }

    #[test]
    fn structural_keywords_are_lowercase() {
        assert_eq!(keyword_spec("repeat").map(|s| s.kind), Some(ElementKind::Repeat));
        assert_eq!(keyword_spec("if").map(|s| s.kind), Some(ElementKind::Conditional));
    }

    #[test]
    fn sections_carry_default_docks() {
        assert_eq!(
            kind_spec(ElementKind::Header).default_dock,
            Some(DockPosition::Top)
        );
        assert_eq!(
            kind_spec(ElementKind::Sidebar).default_dock,
            Some(DockPosition::Left)
        );
        assert_eq!(kind_spec(ElementKind::Content).default_dock, None);
    }

    #[test]
    fn table_components_use_row_grammar() {
        assert_eq!(
            kind_spec(ElementKind::Table).children,
            ChildGrammar::TableRows
        );
        assert_eq!(
            kind_spec(ElementKind::Tree).children,
            ChildGrammar::TreeItems
        );
        assert_eq!(
            kind_spec(ElementKind::Dropdown).children,
            ChildGrammar::ListItems
        );
    }

    #[test]
    fn dock_position_parses_all_edges() {
        assert_eq!(DockPosition::parse("top"), Some(DockPosition::Top));
        assert_eq!(DockPosition::parse("fill"), Some(DockPosition::Fill));
        assert_eq!(DockPosition::parse("center"), None);
    }

    #[test]
    fn text_sized_kinds_include_the_text_bearing_controls() {
        for kind in [
            ElementKind::Button,
            ElementKind::Label,
            ElementKind::Heading,
            ElementKind::Link,
            ElementKind::Tab,
        ] {
            assert!(kind_spec(kind).text_sized, "{kind} should be text sized");
        }
        assert!(!kind_spec(ElementKind::TextInput).text_sized);
    }
}
