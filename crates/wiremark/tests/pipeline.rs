// End-to-end tests through the facade entry points
//
// These drive the whole pipeline the way a CLI or plugin host would:
// source text in, diagnostics and SVG out. Stage-level behavior has its own
// tests in the lexer, parser, layout and render crates; this suite checks
// that the pieces compose.

use wiremark::{
    ElementKind, RenderOptions, Severity, StyleName, ThemeChoice, compile, compute_layout, parse,
    validate,
};

// ===== Documented example =====

#[test]
fn language_tour_example_compiles_as_documented() {
    let source = "wireframe clean\n    Button \"Click me\"\n/wireframe";
    let outcome = parse(source);
    assert!(outcome.errors.is_empty(), "{:?}", outcome.errors);

    let document = &outcome.document;
    assert_eq!(document.style, StyleName::Clean);
    assert_eq!(document.children.len(), 1);
    assert_eq!(document.children[0].kind, ElementKind::Button);
    assert_eq!(document.children[0].text.as_deref(), Some("Click me"));

    let compiled = compile(source, &RenderOptions::default());
    assert!(compiled.errors.is_empty());
    assert!(compiled.svg.contains("Click me"));
    assert!(compiled.svg.starts_with("<svg"));
}

// ===== Collect-don't-stop policy =====

#[test]
fn duplicate_ids_are_reported_but_both_nodes_survive() {
    let source = "Button \"A\" :btn1\nButton \"B\" :btn1";
    let outcome = parse(source);

    assert_eq!(outcome.document.children.len(), 2);
    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.errors[0].message.contains("duplicate"));
    assert_eq!(outcome.errors[0].severity, Severity::Error);

    // The same source still renders
    let compiled = compile(source, &RenderOptions::default());
    assert!(compiled.svg.contains("</svg>"));
}

#[test]
fn unknown_keyword_costs_one_line_and_siblings_render() {
    let source = "Vertical\n    Buttn \"typo\"\n    Button \"survivor\"";
    let compiled = compile(source, &RenderOptions::default());

    assert_eq!(compiled.errors.len(), 1, "{:?}", compiled.errors);
    assert!(compiled.errors[0].message.contains("unknown element"));
    assert!(compiled.svg.contains("survivor"));
}

#[test]
fn heavily_malformed_input_still_produces_svg() {
    let source = "~~~\nwireframe\n  | stray |\nButtn x\n/Card\nButton \"ok\"";
    let compiled = compile(source, &RenderOptions::default());

    assert!(!compiled.errors.is_empty());
    assert!(compiled.svg.starts_with("<svg"));
    assert!(compiled.svg.contains("ok"));
}

// ===== validate =====

#[test]
fn validate_accepts_a_clean_document() {
    let outcome = validate("Card \"Profile\"\n    Label \"Name\"\n    TextInput \"Jane\"");
    assert!(outcome.valid);
    assert!(outcome.errors.is_empty());
}

#[test]
fn validate_rejects_error_diagnostics() {
    let outcome = validate("Button :a\nButton :a");
    assert!(!outcome.valid);
    assert!(!outcome.errors.is_empty());
}

#[test]
fn warnings_do_not_invalidate() {
    // dock=middle is recognized syntax with an unknown value
    let outcome = validate("Sidebar dock=middle");
    assert!(outcome.valid, "{:?}", outcome.errors);
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.errors[0].severity, Severity::Warning);
}

// ===== Theme selection =====

#[test]
fn unknown_theme_name_warns_and_falls_back() {
    let options = RenderOptions {
        theme: Some(ThemeChoice::Named("neon".to_string())),
        ..RenderOptions::default()
    };
    let compiled = compile("wireframe blueprint\n    Label \"x\"\n/wireframe", &options);

    assert_eq!(compiled.errors.len(), 1);
    assert_eq!(compiled.errors[0].severity, Severity::Warning);
    assert!(compiled.errors[0].message.contains("unknown theme"));
    assert!(compiled.svg.contains("data-theme=\"blueprint\""));
}

#[test]
fn named_theme_overrides_the_document_style() {
    let options = RenderOptions {
        theme: Some(ThemeChoice::Named("realistic".to_string())),
        ..RenderOptions::default()
    };
    let compiled = compile("wireframe sketch\n    Button \"Go\"\n/wireframe", &options);
    assert!(compiled.errors.is_empty());
    assert!(compiled.svg.contains("data-theme=\"realistic\""));
}

// ===== A realistic screen =====

#[test]
fn dashboard_screen_compiles_end_to_end() {
    let source = r#"
wireframe clean
    %title: Admin dashboard
    Dock
        Header "Acme Console"
        Sidebar
            List "Sections"
                - Overview
                - Reports
                - Settings
        Content
            Tabs
                Tab "Summary" active
                    Grid cols=2
                        Card "Revenue"
                            Heading "$12,400"
                        Card "Signups"
                            Heading "312"
                Tab "Details"
            Table "Recent orders"
                | Order | Status |
                |-------|--------|
                | #1001 | Shipped |
                | #1002 | Pending |
/wireframe
"#;
    let outcome = parse(source);
    assert!(outcome.errors.is_empty(), "{:?}", outcome.errors);
    assert_eq!(
        outcome.document.attributes.get("title").and_then(|v| v.as_str()),
        Some("Admin dashboard")
    );

    let tree = compute_layout(&outcome.document, 1024.0, 768.0);
    assert!(tree.node_count() > 10);

    let compiled = compile(source, &RenderOptions::default());
    assert!(compiled.errors.is_empty());
    for needle in ["Acme Console", "Overview", "Summary", "#1001", "Shipped"] {
        assert!(compiled.svg.contains(needle), "missing {needle:?}");
    }
}

#[test]
fn repeat_and_conditional_shape_the_rendered_tree() {
    let source = "Vertical\n    repeat 3\n        Button \"Row\"\n    if admin\n        Button \"Delete\"";
    let outcome = parse(source);
    assert!(outcome.errors.is_empty());

    let tree = compute_layout(&outcome.document, 800.0, 600.0);
    // One Vertical with three expanded rows plus the conditional's child
    assert_eq!(tree.nodes.len(), 1);
    assert_eq!(tree.nodes[0].children.len(), 4);
}

#[test]
fn overlays_render_after_the_page() {
    let compiled = compile(
        "Content\n    Label \"page\"\nModal \"Confirm\"\n    Button \"Yes\"",
        &RenderOptions::default(),
    );
    assert!(compiled.errors.is_empty());

    let page_at = compiled.svg.find(">page<");
    let modal_at = compiled.svg.find(">Confirm<");
    assert!(page_at.is_some() && modal_at.is_some());
    assert!(modal_at > page_at, "modal must paint above the page");
}
