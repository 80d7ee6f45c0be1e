//! Diagnostics
//!
//! Every stage of the pipeline reports problems as [`Diagnostic`] values and
//! keeps going: the lexer recovers at the next line, the parser drops a single
//! token, the renderer falls back to placeholder boxes. Nothing in the
//! pipeline panics or returns early on malformed input; callers always get a
//! best-effort result plus the full list of problems found in one pass.

use crate::location::SourceLocation;
use std::fmt;

/// How bad a diagnostic is.
///
/// Ordering matters: `Warning < Error`, so callers can take the maximum
/// severity of a batch to decide an exit code.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Suspicious but not wrong; output is unaffected or degraded gracefully
    Warning,
    /// A real problem in the source; output is best-effort
    Error,
}

/// Which stage of the pipeline found the problem.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum DiagnosticKind {
    /// Unrecognized character or malformed line shape
    Lexical = 0,
    /// Unexpected token, unclosed block, mismatched closing keyword
    Syntax = 1,
    /// Duplicate identifier, unknown modifier, unknown theme name
    Semantic = 2,
}

/// Display names indexed by `DiagnosticKind` discriminant.
const KIND_NAMES: [&str; 3] = ["lexical", "syntax", "semantic"];

impl DiagnosticKind {
    /// Human-readable name of this kind.
    pub fn name(self) -> &'static str {
        KIND_NAMES[self as usize]
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One reported problem, pointing at a source position.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Diagnostic {
    /// Warning or error
    pub severity: Severity,

    /// Lexical, syntax, or semantic
    pub kind: DiagnosticKind,

    /// What went wrong, phrased for the document author
    pub message: String,

    /// 1-based source line
    pub line: u32,

    /// 1-based source column
    pub column: u32,
}

impl Diagnostic {
    /// Create an error diagnostic at a location.
    pub fn error(kind: DiagnosticKind, message: impl Into<String>, at: SourceLocation) -> Self {
        Self {
            severity: Severity::Error,
            kind,
            message: message.into(),
            line: at.line,
            column: at.column,
        }
    }

    /// Create a warning diagnostic at a location.
    pub fn warning(kind: DiagnosticKind, message: impl Into<String>, at: SourceLocation) -> Self {
        Self {
            severity: Severity::Warning,
            kind,
            message: message.into(),
            line: at.line,
            column: at.column,
        }
    }

    /// Lexical error (unrecognized character, bad string literal).
    pub fn lexical(message: impl Into<String>, at: SourceLocation) -> Self {
        Self::error(DiagnosticKind::Lexical, message, at)
    }

    /// Syntax error (unexpected token, mismatched closer).
    pub fn syntax(message: impl Into<String>, at: SourceLocation) -> Self {
        Self::error(DiagnosticKind::Syntax, message, at)
    }

    /// Semantic error (duplicate id, unknown theme).
    pub fn semantic(message: impl Into<String>, at: SourceLocation) -> Self {
        Self::error(DiagnosticKind::Semantic, message, at)
    }

    /// True if this diagnostic is an error (not a warning).
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(
            f,
            "{severity}: {} (line {}, column {})",
            self.message, self.line, self.column
        )
    }
}

/// True if any diagnostic in the batch is error severity.
pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(Diagnostic::is_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(line: u32, column: u32) -> SourceLocation {
        SourceLocation::new(line, column, 0)
    }

    #[test]
    fn severity_orders_warning_below_error() {
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn kind_names_match_discriminants() {
        assert_eq!(DiagnosticKind::Lexical.name(), "lexical");
        assert_eq!(DiagnosticKind::Syntax.name(), "syntax");
        assert_eq!(DiagnosticKind::Semantic.name(), "semantic");
    }

    #[test]
    fn display_includes_position() {
        let d = Diagnostic::syntax("unexpected token", at(4, 9));
        assert_eq!(d.to_string(), "error: unexpected token (line 4, column 9)");
    }

    #[test]
    fn warning_display_is_labelled() {
        let d = Diagnostic::warning(DiagnosticKind::Semantic, "Divider takes no children", at(2, 5));
        assert!(d.to_string().starts_with("warning:"));
        assert!(!d.is_error());
    }

    #[test]
    fn has_errors_ignores_warnings() {
        let only_warnings = vec![Diagnostic::warning(
            DiagnosticKind::Semantic,
            "unused",
            at(1, 1),
        )];
        assert!(!has_errors(&only_warnings));

        let mixed = vec![
            Diagnostic::warning(DiagnosticKind::Semantic, "unused", at(1, 1)),
            Diagnostic::lexical("unrecognized character '~'", at(2, 3)),
        ];
        assert!(has_errors(&mixed));
    }
}
