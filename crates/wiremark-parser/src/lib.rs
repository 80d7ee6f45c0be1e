// Allow unwrap in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Recursive-descent parser for the wiremark wireframe language
//!
//! Module structure:
//! - [`stream`] - cursor over the lexed token slice
//! - [`error`] - recorded parse errors and their diagnostic conversion
//! - [`document`] - document wrapper, document attributes, data sections
//! - [`element`] - the uniform element production and children grammars
//!
//! The grammar is LL(1): element dispatch looks at one keyword token and the
//! trailing-modifier loop looks ahead at most one token. Parsing never
//! fails: on an unusable token the parser records an error, drops that one
//! token, and continues, so callers always receive a best-effort document
//! plus every problem found in a single pass.

mod document;
mod element;
mod error;
mod stream;

pub use error::{ParseError, ParseErrorKind};

use indexmap::IndexMap;
use stream::TokenStream;
use wiremark_ast::{Diagnostic, Document};
use wiremark_lexer::{Token, tokenize};

/// Parser state: the cursor, recorded errors, and the document-wide set of
/// declared ids used for duplicate detection.
pub(crate) struct Parser<'t> {
    stream: TokenStream<'t>,
    errors: Vec<ParseError>,
    /// id -> line of first declaration, in declaration order
    declared_ids: IndexMap<String, u32>,
}

impl<'t> Parser<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Self {
            stream: TokenStream::new(tokens),
            errors: Vec::new(),
            declared_ids: IndexMap::new(),
        }
    }

    fn error(&mut self, error: ParseError) {
        self.errors.push(error);
    }
}

/// Parse a source string end to end.
///
/// The document is always produced, possibly empty; diagnostics combine
/// lexical and parse problems, ordered by source position.
pub fn parse(source: &str) -> (Document, Vec<Diagnostic>) {
    let (tokens, mut diagnostics) = tokenize(source);
    let (document, parse_diagnostics) = parse_tokens(&tokens);
    diagnostics.extend(parse_diagnostics);
    diagnostics.sort_by_key(|d| (d.line, d.column));
    (document, diagnostics)
}

/// Parse a pre-lexed token stream.
pub fn parse_tokens(tokens: &[Token]) -> (Document, Vec<Diagnostic>) {
    let mut parser = Parser::new(tokens);
    let document = parser.document();
    let diagnostics = parser.errors.into_iter().map(Diagnostic::from).collect();
    (document, diagnostics)
}
