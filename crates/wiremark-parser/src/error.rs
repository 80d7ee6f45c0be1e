//! Parser-internal errors
//!
//! Productions record [`ParseError`] values and keep parsing; nothing here is
//! ever returned as `Err` past the crate boundary. The public API converts
//! every recorded error into a [`Diagnostic`] with the right kind and
//! severity.

use wiremark_ast::{Diagnostic, DiagnosticKind, Severity, SourceLocation};
use wiremark_lexer::TokenKind;

/// Classification of a parse error, mapped to diagnostic kind and severity
/// during conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A token the current production cannot use
    UnexpectedToken,
    /// Input ended inside a production
    UnexpectedEof,
    /// `/Name` closer that does not match its opening keyword
    MismatchedClose,
    /// `:id` already declared elsewhere in the document
    DuplicateId,
    /// Word in element position that is not a registered kind
    UnknownElement,
    /// Bare word that is not a known modifier
    UnknownModifier,
    /// Style word in the wrapper that is not a built-in style
    UnknownStyle,
    /// Attribute or count value outside what the engine accepts
    InvalidValue,
    /// Children block under a kind whose grammar has none
    UnexpectedChildren,
    /// Anything else that is malformed
    InvalidSyntax,
}

/// One recorded parse error.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message} (line {line}, column {column})")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    pub line: u32,
    pub column: u32,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, message: impl Into<String>, at: SourceLocation) -> Self {
        Self {
            kind,
            message: message.into(),
            line: at.line,
            column: at.column,
        }
    }

    /// Unexpected token with a short description of where it appeared.
    pub fn unexpected(found: &TokenKind, context: &str, at: SourceLocation) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken,
            format!("unexpected {found} {context}"),
            at,
        )
    }

    /// `/found` where `/expected` (or nothing) belongs.
    pub fn mismatched_close(found: &str, expected: &str, at: SourceLocation) -> Self {
        Self::new(
            ParseErrorKind::MismatchedClose,
            format!("closing '/{found}' does not match '{expected}'"),
            at,
        )
    }

    /// Second declaration of an id.
    pub fn duplicate_id(name: &str, first_line: u32, at: SourceLocation) -> Self {
        Self::new(
            ParseErrorKind::DuplicateId,
            format!("duplicate id ':{name}' (first declared on line {first_line})"),
            at,
        )
    }

    pub fn invalid(message: impl Into<String>, at: SourceLocation) -> Self {
        Self::new(ParseErrorKind::InvalidSyntax, message, at)
    }
}

impl From<ParseError> for Diagnostic {
    fn from(error: ParseError) -> Diagnostic {
        let (kind, severity) = match error.kind {
            ParseErrorKind::UnexpectedToken
            | ParseErrorKind::UnexpectedEof
            | ParseErrorKind::MismatchedClose
            | ParseErrorKind::InvalidSyntax => (DiagnosticKind::Syntax, Severity::Error),
            ParseErrorKind::DuplicateId
            | ParseErrorKind::UnknownElement
            | ParseErrorKind::UnknownModifier
            | ParseErrorKind::UnknownStyle => (DiagnosticKind::Semantic, Severity::Error),
            ParseErrorKind::InvalidValue | ParseErrorKind::UnexpectedChildren => {
                (DiagnosticKind::Semantic, Severity::Warning)
            }
        };
        Diagnostic {
            severity,
            kind,
            message: error.message,
            line: error.line,
            column: error.column,
        }
    }
}
