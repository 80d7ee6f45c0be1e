//! Source locations and spans
//!
//! Every token and AST node records where in the source text it came from so
//! diagnostics can point at the offending line and column. Locations are
//! plain values; they are computed once by the lexer and copied around freely.

use std::fmt;

/// A position in the source text.
///
/// `line` and `column` are 1-based (what editors and diagnostics show),
/// `offset` is the 0-based byte offset into the source string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SourceLocation {
    /// 1-based line number
    pub line: u32,

    /// 1-based column number (in characters, not bytes)
    pub column: u32,

    /// 0-based byte offset into the source
    pub offset: u32,
}

impl SourceLocation {
    /// Create a location from explicit coordinates.
    pub fn new(line: u32, column: u32, offset: u32) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// The start of the source text (line 1, column 1).
    pub fn origin() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A contiguous source range, `start` inclusive to `end` exclusive.
///
/// Invariant: `end.offset >= start.offset`. Spans over multiple lines are
/// normal (an element's span covers its whole children block).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SourceSpan {
    /// First position covered by the span
    pub start: SourceLocation,

    /// Position one past the last covered character
    pub end: SourceLocation,
}

impl SourceSpan {
    /// Create a span from a start and end location.
    pub fn new(start: SourceLocation, end: SourceLocation) -> Self {
        debug_assert!(end.offset >= start.offset, "span end before start");
        Self { start, end }
    }

    /// A zero-width span at a single location.
    pub fn point(at: SourceLocation) -> Self {
        Self { start: at, end: at }
    }

    /// The smallest span covering both `self` and `other`.
    pub fn merge(self, other: SourceSpan) -> Self {
        let start = if other.start.offset < self.start.offset {
            other.start
        } else {
            self.start
        };
        let end = if other.end.offset > self.end.offset {
            other.end
        } else {
            self.end
        };
        Self { start, end }
    }

    /// Extend this span so it also covers `other`.
    pub fn extend_to(&mut self, other: SourceSpan) {
        *self = self.merge(other);
    }
}

impl Default for SourceSpan {
    fn default() -> Self {
        Self::point(SourceLocation::origin())
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.start.fmt(f)
    }
}
