//! The element production and children grammars
//!
//! Every element follows the same shape: keyword, optional leading string,
//! a trailing run of markers/modifiers/attributes up to the end of line,
//! then an optional indented children block whose grammar comes from the
//! kind registry, then an optional `/Name` closer. Recovery is local: an
//! unusable token costs one error and one token, never the rest of the
//! document.

use crate::Parser;
use crate::error::{ParseError, ParseErrorKind};
use wiremark_ast::{
    ChildGrammar, DockPosition, Element, ElementKind, KindSpec, Payload, Scalar, SourceSpan,
    TableData, TreeItem, kind_spec,
};
use wiremark_lexer::TokenKind;

impl Parser<'_> {
    /// Parse one element whose keyword token is current.
    pub(crate) fn element(&mut self, spec: &'static KindSpec) -> Element {
        let start = self.stream.location();
        self.stream.advance();
        let mut element = Element::new(spec.kind, SourceSpan::point(start));

        match spec.kind {
            ElementKind::Repeat => self.repeat_head(&mut element),
            ElementKind::Conditional => self.conditional_head(&mut element),
            _ => {
                if let Some(TokenKind::Str(text)) = self.stream.peek_kind() {
                    element.text = Some(text.clone());
                    self.stream.advance();
                }
            }
        }

        self.trailing_run(&mut element);
        self.stream.eat(&TokenKind::Newline);

        if self.stream.eat(&TokenKind::Indent) {
            self.children_block(&mut element, spec);
        }

        self.closing_keyword(spec);

        element.span = SourceSpan::new(start, self.stream.prev_end());
        element
    }

    /// `repeat <count>`: the count is required and clamped to a sane range.
    fn repeat_head(&mut self, element: &mut Element) {
        let at = self.stream.location();
        if let Some(TokenKind::Number(count)) = self.stream.peek_kind() {
            let count = *count;
            self.stream.advance();
            let clamped = count.clamp(0.0, 100.0).floor();
            if clamped != count {
                self.error(ParseError::new(
                    ParseErrorKind::InvalidValue,
                    format!("repeat count {count} clamped to {clamped}"),
                    at,
                ));
            }
            element
                .attributes
                .insert("count".to_string(), Scalar::Number(clamped));
        } else {
            self.error(ParseError::invalid("'repeat' needs a count", at));
            element
                .attributes
                .insert("count".to_string(), Scalar::Number(1.0));
        }
    }

    /// `if <condition>`: a bare word or a `?binding` names the condition.
    fn conditional_head(&mut self, element: &mut Element) {
        match self.stream.peek_kind() {
            Some(TokenKind::Word(word)) => {
                element.text = Some(word.clone());
                self.stream.advance();
            }
            Some(TokenKind::Binding(path)) => {
                element.text = Some(path.clone());
                element.binding = Some(path.clone());
                self.stream.advance();
            }
            _ => {
                let at = self.stream.location();
                self.error(ParseError::invalid("'if' needs a condition", at));
            }
        }
    }

    /// Markers, modifiers and attributes up to the end of the line.
    fn trailing_run(&mut self, element: &mut Element) {
        loop {
            let at = self.stream.location();
            match self.stream.peek_kind() {
                None
                | Some(
                    TokenKind::Newline
                    | TokenKind::Indent
                    | TokenKind::Dedent
                    | TokenKind::Close(_),
                ) => break,
                Some(TokenKind::Id(name)) => {
                    self.declare_id(name.clone(), at);
                    element.id = Some(name.clone());
                    self.stream.advance();
                }
                Some(TokenKind::Binding(path)) => {
                    element.binding = Some(path.clone());
                    self.stream.advance();
                }
                Some(TokenKind::Navigation(target)) => {
                    element.navigation = Some(target.clone());
                    self.stream.advance();
                }
                Some(TokenKind::Icon(name)) => {
                    element.icon = Some(name.clone());
                    self.stream.advance();
                }
                Some(TokenKind::Attribute { name, value }) => {
                    self.check_attribute_value(name, value, at);
                    element.attributes.insert(name.clone(), value.clone());
                    self.stream.advance();
                }
                Some(TokenKind::Word(word)) => {
                    if !element.modifiers.set(word) {
                        self.error(ParseError::new(
                            ParseErrorKind::UnknownModifier,
                            format!("unknown modifier '{word}'"),
                            at,
                        ));
                    }
                    self.stream.advance();
                }
                Some(TokenKind::Str(text)) => {
                    // A second string is the placeholder (inputs), anything
                    // further is noise
                    if element.text.is_none() {
                        element.text = Some(text.clone());
                    } else if !element.attributes.contains_key("placeholder") {
                        element
                            .attributes
                            .insert("placeholder".to_string(), Scalar::Str(text.clone()));
                    } else {
                        self.error(ParseError::unexpected(
                            &TokenKind::Str(text.clone()),
                            "after text and placeholder",
                            at,
                        ));
                    }
                    self.stream.advance();
                }
                Some(other) => {
                    let context = format!("after '{}'", element.kind);
                    self.error(ParseError::unexpected(other, &context, at));
                    self.stream.advance();
                }
            }
        }
    }

    /// Record an id declaration, reporting duplicates. The element keeps the
    /// id either way.
    fn declare_id(&mut self, name: String, at: wiremark_ast::SourceLocation) {
        if let Some(first_line) = self.declared_ids.get(&name) {
            self.error(ParseError::duplicate_id(&name, *first_line, at));
        } else {
            self.declared_ids.insert(name, at.line);
        }
    }

    /// Warn about attribute values the engine will not recognize.
    fn check_attribute_value(
        &mut self,
        name: &str,
        value: &Scalar,
        at: wiremark_ast::SourceLocation,
    ) {
        let known = match (name, value) {
            ("dock", Scalar::Str(word)) => DockPosition::parse(word).is_some(),
            ("align", Scalar::Str(word)) => {
                matches!(word.as_str(), "start" | "center" | "end" | "stretch")
            }
            ("justify", Scalar::Str(word)) => {
                matches!(word.as_str(), "between" | "around" | "center" | "end")
            }
            _ => true,
        };
        if !known {
            self.error(ParseError::new(
                ParseErrorKind::InvalidValue,
                format!("unrecognized {name} value '{value}'"),
                at,
            ));
        }
    }

    /// Children between an already-consumed Indent and its Dedent, parsed
    /// per the kind's registered grammar.
    fn children_block(&mut self, element: &mut Element, spec: &'static KindSpec) {
        match spec.children {
            ChildGrammar::Elements => {
                element.children = self.element_list();
            }
            ChildGrammar::TableRows => {
                let table = self.table_rows(spec.keyword);
                element.payload = Some(Payload::Table(table));
            }
            ChildGrammar::TreeItems => {
                let items = self.tree_items(spec.keyword);
                element.payload = Some(Payload::Tree(items));
            }
            ChildGrammar::ListItems => {
                let items = self.list_items(spec.keyword);
                element.payload = Some(Payload::Items(items));
            }
            ChildGrammar::None => {
                let at = self.stream.location();
                self.error(ParseError::new(
                    ParseErrorKind::UnexpectedChildren,
                    format!("'{}' does not take children", spec.keyword),
                    at,
                ));
                element.children = self.element_list();
            }
        }
    }

    /// A flat run of elements ending at the block's Dedent.
    ///
    /// Stray extra indentation (usually left behind by a recovery) is
    /// reported once and flattened so the matching Dedent cannot end the
    /// block early.
    pub(crate) fn element_list(&mut self) -> Vec<Element> {
        let mut elements = Vec::new();
        let mut depth: u32 = 0;
        loop {
            match self.stream.peek_kind() {
                None => break,
                Some(TokenKind::Indent) => {
                    let at = self.stream.location();
                    self.error(ParseError::unexpected(
                        &TokenKind::Indent,
                        "in element list",
                        at,
                    ));
                    depth += 1;
                    self.stream.advance();
                }
                Some(TokenKind::Dedent) => {
                    self.stream.advance();
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                Some(TokenKind::Newline) => {
                    self.stream.advance();
                }
                Some(TokenKind::Keyword(kind)) => {
                    let spec = kind_spec(*kind);
                    let child = self.element(spec);
                    elements.push(child);
                }
                Some(TokenKind::Word(word)) => {
                    // A typo'd keyword takes its whole line with it
                    let at = self.stream.location();
                    let message = format!("unknown element '{word}'");
                    self.error(ParseError::new(ParseErrorKind::UnknownElement, message, at));
                    self.stream.synchronize_line();
                }
                Some(other) => {
                    // One error, one token; the next sibling still parses
                    let at = self.stream.location();
                    self.error(ParseError::unexpected(other, "in element list", at));
                    self.stream.advance();
                }
            }
        }
        elements
    }

    /// `| a | b |` rows until the block's Dedent. The first row becomes the
    /// header when a `|---|` separator follows it.
    pub(crate) fn table_rows(&mut self, context: &str) -> TableData {
        let mut rows: Vec<Vec<String>> = Vec::new();
        let mut separator_after: Option<usize> = None;
        let mut depth: u32 = 0;
        loop {
            match self.stream.peek_kind() {
                None => break,
                Some(TokenKind::Indent) => {
                    depth += 1;
                    self.stream.advance();
                }
                Some(TokenKind::Dedent) => {
                    self.stream.advance();
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                Some(TokenKind::Newline) => {
                    self.stream.advance();
                }
                Some(TokenKind::TableRow(cells)) => {
                    rows.push(cells.clone());
                    self.stream.advance();
                }
                Some(TokenKind::TableSeparator) => {
                    if separator_after.is_none() {
                        separator_after = Some(rows.len());
                    }
                    self.stream.advance();
                }
                Some(other) => {
                    let at = self.stream.location();
                    let context = format!("in '{context}' rows");
                    self.error(ParseError::unexpected(other, &context, at));
                    self.stream.advance();
                }
            }
        }

        match separator_after {
            Some(1) => {
                let mut rows = rows;
                let columns = rows.remove(0);
                TableData {
                    columns,
                    rows,
                    has_header: true,
                }
            }
            // A separator anywhere else does not make a header
            _ => TableData {
                columns: Vec::new(),
                rows,
                has_header: false,
            },
        }
    }

    /// `+`/`-` items until the block's Dedent, tracking nesting depth from
    /// the Indent/Dedent tokens inside the block.
    fn tree_items(&mut self, context: &str) -> Vec<TreeItem> {
        let mut items = Vec::new();
        let mut depth: u32 = 0;
        loop {
            match self.stream.peek_kind() {
                None => break,
                Some(TokenKind::Newline) => {
                    self.stream.advance();
                }
                Some(TokenKind::Indent) => {
                    depth += 1;
                    self.stream.advance();
                }
                Some(TokenKind::Dedent) => {
                    self.stream.advance();
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                Some(TokenKind::TreeBranch(text)) => {
                    items.push(TreeItem {
                        text: text.clone(),
                        depth,
                        is_branch: true,
                    });
                    self.stream.advance();
                }
                Some(TokenKind::TreeLeaf(text)) => {
                    items.push(TreeItem {
                        text: text.clone(),
                        depth,
                        is_branch: false,
                    });
                    self.stream.advance();
                }
                Some(other) => {
                    let at = self.stream.location();
                    let context = format!("in '{context}' items");
                    self.error(ParseError::unexpected(other, &context, at));
                    self.stream.advance();
                }
            }
        }
        items
    }

    /// `- item` lines until the block's Dedent. Extra indentation inside the
    /// block is flattened; list items have no hierarchy.
    fn list_items(&mut self, context: &str) -> Vec<String> {
        let mut items = Vec::new();
        let mut depth: u32 = 0;
        loop {
            match self.stream.peek_kind() {
                None => break,
                Some(TokenKind::Indent) => {
                    depth += 1;
                    self.stream.advance();
                }
                Some(TokenKind::Dedent) => {
                    self.stream.advance();
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                Some(TokenKind::Newline) => {
                    self.stream.advance();
                }
                Some(TokenKind::TreeLeaf(text)) => {
                    items.push(text.clone());
                    self.stream.advance();
                }
                Some(TokenKind::TreeBranch(text)) => {
                    let at = self.stream.location();
                    let message = format!("'{context}' items use '-', not '+'");
                    self.error(ParseError::invalid(message, at));
                    items.push(text.clone());
                    self.stream.advance();
                }
                Some(other) => {
                    let at = self.stream.location();
                    let context = format!("in '{context}' items");
                    self.error(ParseError::unexpected(other, &context, at));
                    self.stream.advance();
                }
            }
        }
        items
    }

    /// Optional `/Name` closer. Consumes only closers aimed at this element;
    /// `/wireframe` is left for the document production.
    fn closing_keyword(&mut self, spec: &'static KindSpec) {
        let Some(TokenKind::Close(word)) = self.stream.peek_kind() else {
            return;
        };
        if word == "wireframe" {
            return;
        }
        let at = self.stream.location();
        if word != spec.keyword {
            self.error(ParseError::mismatched_close(word, spec.keyword, at));
        }
        self.stream.advance();
        self.stream.eat(&TokenKind::Newline);
    }
}
