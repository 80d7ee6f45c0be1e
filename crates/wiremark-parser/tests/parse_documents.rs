//! End-to-end parses of well-formed wireframe sources.
//!
//! These tests run the full lexer + parser pipeline on realistic documents
//! and check the shape of the resulting tree:
//! - the `wireframe <style>` wrapper and document attributes
//! - nested containers, markers, modifiers and attributes
//! - specialized children payloads (tables, trees, lists)
//! - `repeat` / `if` structural elements
//! - trailing data sections

use wiremark_ast::{
    DataSectionKind, Document, ElementKind, Payload, Scalar, StyleName,
};
use wiremark_parser::parse;

/// Parse a source that must produce no diagnostics.
fn parse_clean(source: &str) -> Document {
    let (document, diagnostics) = parse(source);
    assert!(
        diagnostics.is_empty(),
        "expected a clean parse, got: {diagnostics:?}"
    );
    document
}

// =============================================================================
// Wrapper and document attributes
// =============================================================================

#[test]
fn minimal_wrapped_document() {
    let source = "wireframe clean\n    Button \"Click me\"\n/wireframe";
    let document = parse_clean(source);

    assert_eq!(document.style, StyleName::Clean);
    assert_eq!(document.children.len(), 1, "one top-level element");
    let button = &document.children[0];
    assert_eq!(button.kind, ElementKind::Button);
    assert_eq!(button.text.as_deref(), Some("Click me"));
}

#[test]
fn wrapper_is_optional() {
    let document = parse_clean("Label \"standalone\"");
    assert_eq!(document.style, StyleName::Sketch, "default style");
    assert_eq!(document.children.len(), 1);
}

#[test]
fn wrapper_body_may_be_unindented() {
    let source = r#"wireframe blueprint
Header "Console"
Footer "v2.0"
/wireframe"#;
    let document = parse_clean(source);
    assert_eq!(document.style, StyleName::Blueprint);
    assert_eq!(document.children.len(), 2);
}

#[test]
fn document_attributes_collect_in_order() {
    let source = "%title: Admin Console\n%version: 2\nLabel \"body\"";
    let document = parse_clean(source);

    assert_eq!(
        document.attributes.get("title"),
        Some(&Scalar::Str("Admin Console".to_string()))
    );
    assert_eq!(
        document.attributes.get("version"),
        Some(&Scalar::Number(2.0))
    );
    let names: Vec<&str> = document.attributes.keys().map(String::as_str).collect();
    assert_eq!(names, ["title", "version"]);
}

#[test]
fn empty_input_yields_an_empty_document() {
    let document = parse_clean("");
    assert!(document.is_empty());
    assert_eq!(document.style, StyleName::Sketch);
}

#[test]
fn comment_only_input_yields_an_empty_document() {
    let document = parse_clean("// nothing here\n\n/* or\nhere */\n");
    assert!(document.is_empty());
}

// =============================================================================
// Elements, markers and attributes
// =============================================================================

#[test]
fn markers_and_modifiers_land_on_the_element() {
    let source = r#"Button "Save" :save ?form.dirty @home $check primary disabled"#;
    let document = parse_clean(source);

    let button = &document.children[0];
    assert_eq!(button.id.as_deref(), Some("save"));
    assert_eq!(button.binding.as_deref(), Some("form.dirty"));
    assert_eq!(button.navigation.as_deref(), Some("home"));
    assert_eq!(button.icon.as_deref(), Some("check"));
    assert!(button.modifiers.primary);
    assert!(button.modifiers.disabled);
    assert!(!button.modifiers.checked);
}

#[test]
fn second_string_becomes_the_placeholder() {
    let document = parse_clean(r#"TextInput "Email" "you@example.com" required"#);

    let input = &document.children[0];
    assert_eq!(input.text.as_deref(), Some("Email"));
    assert_eq!(
        input.string_attr("placeholder"),
        Some("you@example.com")
    );
    assert!(input.modifiers.required);
}

#[test]
fn nested_containers_follow_indentation() {
    let source = r#"Dock
    Header "Top" dock=top
    Sidebar dock=left w=200
    Vertical
        Label "Body"
        Button "Go"
"#;
    let document = parse_clean(source);

    let dock = &document.children[0];
    assert_eq!(dock.kind, ElementKind::Dock);
    assert_eq!(dock.children.len(), 3);

    let sidebar = &dock.children[1];
    assert_eq!(sidebar.string_attr("dock"), Some("left"));
    assert_eq!(sidebar.number_attr("w"), Some(200.0));

    let vertical = &dock.children[2];
    assert_eq!(vertical.children.len(), 2);
    assert_eq!(vertical.children[1].kind, ElementKind::Button);
}

#[test]
fn matching_closers_are_consumed_silently() {
    let source = r#"Card "Login"
    TextInput "User"
    Button "OK"
/Card
Label "after"
"#;
    let document = parse_clean(source);
    assert_eq!(document.children.len(), 2);
    assert_eq!(document.children[0].children.len(), 2);
    assert_eq!(document.children[1].kind, ElementKind::Label);
}

// =============================================================================
// Specialized children payloads
// =============================================================================

#[test]
fn table_with_separator_has_a_header() {
    let source = r#"Table "Users"
    | Name  | Email    |
    |-------|----------|
    | Alice | a@ex.io  |
    | Bob   | b@ex.io  |
"#;
    let document = parse_clean(source);

    let table = &document.children[0];
    assert_eq!(table.text.as_deref(), Some("Users"));
    let Some(Payload::Table(data)) = &table.payload else {
        panic!("expected table payload, got: {:?}", table.payload);
    };
    assert!(data.has_header);
    assert_eq!(data.columns, ["Name", "Email"]);
    assert_eq!(data.rows.len(), 2);
    assert_eq!(data.rows[0], ["Alice", "a@ex.io"]);
}

#[test]
fn table_without_separator_has_no_header() {
    let source = "Table\n    | 1 | one |\n    | 2 | two |\n";
    let document = parse_clean(source);

    let Some(Payload::Table(data)) = &document.children[0].payload else {
        panic!("expected table payload");
    };
    assert!(!data.has_header);
    assert!(data.columns.is_empty());
    assert_eq!(data.rows.len(), 2);
}

#[test]
fn tree_items_track_their_depth() {
    let source = r#"Tree "Mail"
    + Inbox
        - Starred
        - Snoozed
    + Archive
    - Trash
"#;
    let document = parse_clean(source);

    let Some(Payload::Tree(items)) = &document.children[0].payload else {
        panic!("expected tree payload");
    };
    let shape: Vec<(&str, u32, bool)> = items
        .iter()
        .map(|i| (i.text.as_str(), i.depth, i.is_branch))
        .collect();
    assert_eq!(
        shape,
        [
            ("Inbox", 0, true),
            ("Starred", 1, false),
            ("Snoozed", 1, false),
            ("Archive", 0, true),
            ("Trash", 0, false),
        ]
    );
}

#[test]
fn list_items_are_flat_strings() {
    let source = "List \"Files\"\n    - report.pdf\n    - photo.png\n";
    let document = parse_clean(source);

    let Some(Payload::Items(items)) = &document.children[0].payload else {
        panic!("expected items payload");
    };
    assert_eq!(items, &["report.pdf", "photo.png"]);
}

#[test]
fn dropdown_options_use_the_list_grammar() {
    let source = "Dropdown \"Country\"\n    - Sweden\n    - Norway\n";
    let document = parse_clean(source);

    let dropdown = &document.children[0];
    assert_eq!(dropdown.kind, ElementKind::Dropdown);
    let Some(Payload::Items(items)) = &dropdown.payload else {
        panic!("expected items payload");
    };
    assert_eq!(items.len(), 2);
}

// =============================================================================
// Structural elements
// =============================================================================

#[test]
fn repeat_records_its_count() {
    let source = "repeat 3\n    Card \"Item\"\n";
    let document = parse_clean(source);

    let repeat = &document.children[0];
    assert_eq!(repeat.kind, ElementKind::Repeat);
    assert_eq!(repeat.number_attr("count"), Some(3.0));
    assert_eq!(repeat.children.len(), 1, "one template child");
}

#[test]
fn conditional_takes_a_bare_word_condition() {
    let source = "if logged_in\n    Label \"Welcome back\"\n";
    let document = parse_clean(source);

    let cond = &document.children[0];
    assert_eq!(cond.kind, ElementKind::Conditional);
    assert_eq!(cond.text.as_deref(), Some("logged_in"));
    assert_eq!(cond.children.len(), 1);
}

#[test]
fn conditional_takes_a_binding_condition() {
    let source = "if ?user.admin\n    Button \"Delete\"\n";
    let document = parse_clean(source);

    let cond = &document.children[0];
    assert_eq!(cond.binding.as_deref(), Some("user.admin"));
}

// =============================================================================
// Data sections
// =============================================================================

#[test]
fn data_sections_trail_the_element_tree() {
    let source = r#"Label "App"

data "Users"
    | id | name  |
    |----|-------|
    | 1  | Alice |

fields
    | email | required |
"#;
    let document = parse_clean(source);

    assert_eq!(document.children.len(), 1);
    assert_eq!(document.data_sections.len(), 2);

    let users = &document.data_sections[0];
    assert_eq!(users.kind, DataSectionKind::Data);
    assert_eq!(users.name.as_deref(), Some("Users"));
    assert_eq!(users.columns, ["id", "name"]);
    assert_eq!(users.rows, [["1", "Alice"]]);

    let fields = &document.data_sections[1];
    assert_eq!(fields.kind, DataSectionKind::Fields);
    assert_eq!(fields.name, None);
    assert!(fields.columns.is_empty());
    assert_eq!(fields.rows, [["email", "required"]]);
}

#[test]
fn every_section_keyword_is_recognized() {
    let source = "validations\ncalculations\nrules\n";
    let document = parse_clean(source);
    let kinds: Vec<DataSectionKind> =
        document.data_sections.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        [
            DataSectionKind::Validations,
            DataSectionKind::Calculations,
            DataSectionKind::Rules,
        ]
    );
}

// =============================================================================
// Source spans
// =============================================================================

#[test]
fn element_spans_cover_their_blocks() {
    let source = "Vertical\n    Button \"A\"\n    Button \"B\"\n";
    let document = parse_clean(source);

    let vertical = &document.children[0];
    assert_eq!(vertical.span.start.line, 1);
    assert!(
        vertical.span.end.line >= 3,
        "span should reach the last child, got {:?}",
        vertical.span
    );
    let first = &vertical.children[0];
    assert_eq!(first.span.start.line, 2);
    assert_eq!(first.span.start.column, 5);
}
