//! Document-level productions
//!
//! A document is an optional `wireframe <style>` wrapper, a run of elements
//! and `%name: value` attribute lines, and trailing data-section blocks.
//! Indent/Dedent tokens are transparent at this level: the wrapper's body
//! may or may not be indented, and either way the top-level element list is
//! flat.

use crate::Parser;
use crate::error::{ParseError, ParseErrorKind};
use wiremark_ast::{DataSection, DataSectionKind, Document, SourceSpan, StyleName, TableData};
use wiremark_lexer::TokenKind;

impl Parser<'_> {
    pub(crate) fn document(&mut self) -> Document {
        let start = self.stream.location();
        let mut doc = Document::new(SourceSpan::point(start));
        let mut saw_wrapper = false;

        self.stream.skip_newlines();
        if self.at_word("wireframe") {
            self.stream.advance();
            saw_wrapper = true;
            self.wrapper_style(&mut doc);
        }

        loop {
            match self.stream.peek_kind() {
                None => break,
                Some(TokenKind::Newline | TokenKind::Indent | TokenKind::Dedent) => {
                    self.stream.advance();
                }
                Some(TokenKind::DocAttribute { name, value }) => {
                    doc.attributes.insert(name.clone(), value.clone());
                    self.stream.advance();
                }
                Some(TokenKind::Keyword(kind)) => {
                    let spec = wiremark_ast::kind_spec(*kind);
                    let element = self.element(spec);
                    doc.children.push(element);
                }
                Some(TokenKind::Word(word)) => {
                    if let Some(kind) = DataSectionKind::parse(word) {
                        let section = self.data_section(kind);
                        doc.data_sections.push(section);
                    } else {
                        let at = self.stream.location();
                        let message = format!("unknown element '{word}'");
                        self.error(ParseError::new(
                            ParseErrorKind::UnknownElement,
                            message,
                            at,
                        ));
                        // The rest of the line belonged to the unknown element
                        self.stream.synchronize_line();
                    }
                }
                Some(TokenKind::Close(word)) => {
                    let at = self.stream.location();
                    if word == "wireframe" {
                        if !saw_wrapper {
                            self.error(ParseError::new(
                                ParseErrorKind::MismatchedClose,
                                "closing '/wireframe' without an open wireframe block",
                                at,
                            ));
                        }
                        saw_wrapper = false;
                    } else {
                        let message = format!("closing '/{word}' matches nothing open");
                        self.error(ParseError::new(ParseErrorKind::MismatchedClose, message, at));
                    }
                    self.stream.advance();
                }
                Some(other) => {
                    let at = self.stream.location();
                    self.error(ParseError::unexpected(other, "at top level", at));
                    self.stream.advance();
                }
            }
        }

        let end = self.stream.location();
        doc.span = SourceSpan::new(start, end);
        doc
    }

    /// The style word and any document attributes on the wrapper line.
    fn wrapper_style(&mut self, doc: &mut Document) {
        loop {
            match self.stream.peek_kind() {
                Some(TokenKind::Word(word)) => {
                    let at = self.stream.location();
                    match StyleName::parse(word) {
                        Some(style) => doc.style = style,
                        None => {
                            let message = format!(
                                "unknown style '{word}' (expected sketch, blueprint, clean or realistic)"
                            );
                            self.error(ParseError::new(ParseErrorKind::UnknownStyle, message, at));
                        }
                    }
                    self.stream.advance();
                }
                Some(TokenKind::Attribute { name, value }) => {
                    doc.attributes.insert(name.clone(), value.clone());
                    self.stream.advance();
                }
                Some(TokenKind::Newline) | None => break,
                Some(other) => {
                    let at = self.stream.location();
                    self.error(ParseError::unexpected(other, "after 'wireframe'", at));
                    self.stream.advance();
                }
            }
        }
        self.stream.eat(&TokenKind::Newline);
    }

    /// One trailing metadata block: `data "Users"` plus indented rows.
    fn data_section(&mut self, kind: DataSectionKind) -> DataSection {
        let start = self.stream.location();
        self.stream.advance();

        let mut name = None;
        if let Some(TokenKind::Str(text)) = self.stream.peek_kind() {
            name = Some(text.clone());
            self.stream.advance();
        }
        // Anything else before the newline is noise
        while !self.stream.check(&TokenKind::Newline)
            && !self.stream.check(&TokenKind::Indent)
            && !self.stream.at_end()
        {
            let at = self.stream.location();
            if let Some(found) = self.stream.peek_kind() {
                let context = format!("in '{kind}' header");
                self.error(ParseError::unexpected(found, &context, at));
            }
            self.stream.advance();
        }
        self.stream.eat(&TokenKind::Newline);

        let mut table = TableData::default();
        if self.stream.eat(&TokenKind::Indent) {
            table = self.table_rows(kind.name());
        }

        let end = self.stream.location();
        DataSection {
            kind,
            name,
            columns: table.columns,
            rows: table.rows,
            span: SourceSpan::new(start, end),
        }
    }

    fn at_word(&self, word: &str) -> bool {
        matches!(self.stream.peek_kind(), Some(TokenKind::Word(w)) if w == word)
    }
}
