// Allow unwrap in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Lexer for the wiremark wireframe language
//!
//! Tokenization runs in two stages inside [`tokenize`]:
//!
//! 1. A raw [`logos`] scan recognizes keywords, string and number literals,
//!    marker tokens (`:id`, `?binding`, `@nav`, `$icon`), `key=value`
//!    attributes, `%name: value` document attributes, whole-line table rows
//!    and tree markers, closing keywords (`/Name`), and discards comments.
//! 2. An indentation layer compares the column of each line's first token
//!    against a stack of open indentation levels and injects explicit
//!    [`TokenKind::Indent`] / [`TokenKind::Dedent`] tokens, the off-side-rule
//!    treatment that lets a conventional recursive-descent parser consume
//!    whitespace-structured blocks. Blank lines and comment-only lines do
//!    not affect indentation, and every open level is closed at end of
//!    input, so INDENT and DEDENT counts always balance.
//!
//! Columns are counted in characters, so a tab advances one column; mixing
//! tabs and spaces works as long as a file is consistent about it.
//!
//! Lexical errors never abort the scan: the offending character is reported
//! and scanning resumes at the next line.

use logos::Logos;
use wiremark_ast::{Diagnostic, Scalar, SourceLocation, SourceSpan, keyword_spec};

pub use wiremark_ast::kind::ElementKind;

// =============================================================================
// Public tokens
// =============================================================================

/// Discriminated token payloads produced by [`tokenize`].
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// A registered element keyword (`Button`, `Grid`, `repeat`, ...)
    Keyword(ElementKind),
    /// A bare word that is not a registered keyword (modifiers, style names,
    /// `wireframe`, data-section names)
    Word(String),
    /// Double-quoted string literal, escapes already resolved
    Str(String),
    /// Numeric literal
    Number(f64),
    /// `:name` identifier marker
    Id(String),
    /// `?path` binding marker
    Binding(String),
    /// `@target` navigation marker
    Navigation(String),
    /// `$name` icon marker
    Icon(String),
    /// `key=value` attribute, value already classified
    Attribute { name: String, value: Scalar },
    /// `%name: value` document attribute line
    DocAttribute { name: String, value: Scalar },
    /// `| a | b |` row, split into trimmed cells
    TableRow(Vec<String>),
    /// `|---|---|` header separator row
    TableSeparator,
    /// `+ text` tree branch line
    TreeBranch(String),
    /// `- text` tree leaf / list item line
    TreeLeaf(String),
    /// `/Name` closing keyword
    Close(String),
    /// End of a line that carried at least one token
    Newline,
    /// Indentation increased
    Indent,
    /// Indentation decreased (one per closed level)
    Dedent,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Keyword(kind) => write!(f, "keyword '{kind}'"),
            TokenKind::Word(word) => write!(f, "'{word}'"),
            TokenKind::Str(_) => f.write_str("string literal"),
            TokenKind::Number(_) => f.write_str("number"),
            TokenKind::Id(name) => write!(f, "identifier ':{name}'"),
            TokenKind::Binding(path) => write!(f, "binding '?{path}'"),
            TokenKind::Navigation(target) => write!(f, "navigation '@{target}'"),
            TokenKind::Icon(name) => write!(f, "icon '${name}'"),
            TokenKind::Attribute { name, .. } => write!(f, "attribute '{name}='"),
            TokenKind::DocAttribute { name, .. } => write!(f, "document attribute '%{name}'"),
            TokenKind::TableRow(_) => f.write_str("table row"),
            TokenKind::TableSeparator => f.write_str("separator row"),
            TokenKind::TreeBranch(_) => f.write_str("'+' item"),
            TokenKind::TreeLeaf(_) => f.write_str("'-' item"),
            TokenKind::Close(word) => write!(f, "closing '/{word}'"),
            TokenKind::Newline => f.write_str("end of line"),
            TokenKind::Indent => f.write_str("indent"),
            TokenKind::Dedent => f.write_str("dedent"),
        }
    }
}

/// One lexed token with its raw text and source range.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Raw source slice (empty for synthesized Indent/Dedent/Newline)
    pub text: String,
    pub start: SourceLocation,
    pub end: SourceLocation,
}

impl Token {
    /// Source span covered by this token.
    pub fn span(&self) -> SourceSpan {
        SourceSpan::new(self.start, self.end)
    }
}

// =============================================================================
// Raw scan
// =============================================================================

/// Payload of a `|`-prefixed line: data cells or a header separator.
#[derive(Clone, Debug, PartialEq)]
enum RowLine {
    Cells(Vec<String>),
    Separator,
}

#[derive(Logos, Clone, Debug, PartialEq)]
#[logos(skip r"[ \t\r]+")]
#[logos(skip(r"//[^\n]*", allow_greedy = true))]
#[logos(skip r"/\*[^*]*\*+(?:[^/*][^*]*\*+)*/")]
enum RawToken {
    #[token("\n")]
    Newline,

    // Unterminated block comment; the terminated form is skipped above.
    #[token("/*", |lex| { let rest = lex.remainder().len(); lex.bump(rest); })]
    UnterminatedComment,

    #[regex(r"%[A-Za-z_][A-Za-z0-9_-]*:[^\n]*", |lex| split_doc_attribute(lex.slice()), allow_greedy = true)]
    DocAttribute((String, Scalar)),

    #[regex(r"\|[^\n]*", |lex| split_row(lex.slice()), allow_greedy = true)]
    Row(RowLine),

    #[regex(r"\+[ \t]*[^\n]*", |lex| marker_text(lex.slice()), allow_greedy = true)]
    Branch(String),

    #[regex(r"-[ \t]*[^\n]*", |lex| marker_text(lex.slice()), allow_greedy = true)]
    Leaf(String),

    #[regex(r":[A-Za-z_][A-Za-z0-9_-]*", |lex| lex.slice()[1..].to_string())]
    Id(String),

    #[regex(r"\?[A-Za-z_][A-Za-z0-9_.]*", |lex| lex.slice()[1..].to_string())]
    Binding(String),

    #[regex(r"@[A-Za-z_][A-Za-z0-9_-]*", |lex| lex.slice()[1..].to_string())]
    Navigation(String),

    #[regex(r"\$[A-Za-z_][A-Za-z0-9_-]*", |lex| lex.slice()[1..].to_string())]
    Icon(String),

    #[regex(
        r#"[A-Za-z_][A-Za-z0-9_-]*=(?:"(?:[^"\\\n]|\\[^\n])*"|[^ \t\r\n]+)"#,
        |lex| split_attribute(lex.slice())
    )]
    Attribute((String, Scalar)),

    #[regex(r"/[A-Za-z][A-Za-z0-9_-]*", |lex| lex.slice()[1..].to_string())]
    Close(String),

    #[regex(r#""(?:[^"\\\n]|\\[^\n])*""#, |lex| unescape_string(lex.slice()))]
    Str(String),

    #[regex(r"[0-9]+(?:\.[0-9]+)?", |lex| lex.slice().parse::<f64>().ok().filter(|n| n.is_finite()))]
    Number(f64),

    #[regex(r"[A-Za-z_][A-Za-z0-9_-]*", |lex| lex.slice().to_string())]
    Word(String),
}

/// Resolve the backslash escapes of a quoted literal, dropping the quotes.
fn unescape_string(quoted: &str) -> String {
    let inner = &quoted[1..quoted.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            // Unknown escape: keep the character as written
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

/// Split `name=value`, classifying the value and unquoting when needed.
fn split_attribute(slice: &str) -> (String, Scalar) {
    let eq = slice.find('=').unwrap_or(slice.len());
    let name = slice[..eq].to_string();
    let raw = &slice[eq + 1..];
    let value = if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        Scalar::Str(unescape_string(raw))
    } else {
        Scalar::classify(raw)
    };
    (name, value)
}

/// Split `%name: value`.
fn split_doc_attribute(slice: &str) -> (String, Scalar) {
    let colon = slice.find(':').unwrap_or(slice.len());
    let name = slice[1..colon].to_string();
    let value = Scalar::classify(slice[colon + 1..].trim());
    (name, value)
}

/// Split a `|`-prefixed line into trimmed cells, detecting separator rows.
fn split_row(slice: &str) -> RowLine {
    let mut cells: Vec<String> = slice[1..]
        .split('|')
        .map(|cell| cell.trim().to_string())
        .collect();
    // `| a | b |` ends with an empty fragment after the trailing pipe
    if cells.last().is_some_and(String::is_empty) {
        cells.pop();
    }
    let is_separator = !cells.is_empty()
        && cells
            .iter()
            .all(|cell| !cell.is_empty() && cell.chars().all(|c| c == '-' || c == ':'));
    if is_separator {
        RowLine::Separator
    } else {
        RowLine::Cells(cells)
    }
}

/// Text after a `+`/`-` marker, trimmed.
fn marker_text(slice: &str) -> String {
    slice[1..].trim().to_string()
}

// =============================================================================
// Indentation layer
// =============================================================================

/// Byte offsets of each line start, with an end-of-input sentinel.
fn compute_line_starts(source: &str) -> Vec<u32> {
    let mut starts = vec![0u32];
    for (i, b) in source.bytes().enumerate() {
        if b == b'\n' {
            starts.push(i as u32 + 1);
        }
    }
    starts.push(source.len() as u32);
    starts
}

/// Line/column/offset for a byte offset. Columns count characters.
fn locate(source: &str, line_starts: &[u32], offset: usize) -> SourceLocation {
    let offset = offset as u32;
    // partition_point never returns 0: line_starts[0] == 0 <= offset
    let line_index = line_starts.partition_point(|&start| start <= offset).max(1) - 1;
    let line_index = line_index.min(line_starts.len().saturating_sub(2));
    let line_start = line_starts[line_index] as usize;
    let column = source[line_start..offset as usize].chars().count() as u32 + 1;
    SourceLocation::new(line_index as u32 + 1, column, offset)
}

struct Layer<'src> {
    source: &'src str,
    line_starts: Vec<u32>,
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
    indent_stack: Vec<u32>,
    line_has_content: bool,
    skip_line: bool,
}

impl<'src> Layer<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            source,
            line_starts: compute_line_starts(source),
            tokens: Vec::new(),
            diagnostics: Vec::new(),
            indent_stack: vec![1],
            line_has_content: false,
            skip_line: false,
        }
    }

    fn locate(&self, offset: usize) -> SourceLocation {
        locate(self.source, &self.line_starts, offset)
    }

    /// Indentation column of a physical line: leading whitespace width + 1.
    ///
    /// This is measured from the line text itself rather than the first
    /// token's position, so a block comment closing mid-line does not
    /// inflate the line's indentation.
    fn line_indent_column(&self, line: u32) -> u32 {
        let start = self.line_starts[line.saturating_sub(1) as usize] as usize;
        let mut column = 1u32;
        for c in self.source[start..].chars() {
            if c == ' ' || c == '\t' {
                column += 1;
            } else {
                break;
            }
        }
        column
    }

    fn push_synthetic(&mut self, kind: TokenKind, at: SourceLocation) {
        self.tokens.push(Token {
            kind,
            text: String::new(),
            start: at,
            end: at,
        });
    }

    /// Compare a line's first-token column against the indent stack and emit
    /// Indent/Dedent tokens.
    fn resolve_indent(&mut self, column: u32, at: SourceLocation) {
        let current = self.indent_stack.last().copied().unwrap_or(1);
        if column > current {
            self.indent_stack.push(column);
            self.push_synthetic(TokenKind::Indent, at);
            return;
        }
        while self.indent_stack.last().copied().unwrap_or(1) > column {
            self.indent_stack.pop();
            self.push_synthetic(TokenKind::Dedent, at);
        }
        let landed = self.indent_stack.last().copied().unwrap_or(1);
        if landed != column {
            // Dedent to a column no enclosing block opened; snap to the
            // nearest open level and keep going.
            self.diagnostics.push(Diagnostic::lexical(
                format!("inconsistent indentation: column {column} matches no open block"),
                at,
            ));
        }
    }

    fn end_line(&mut self, at: SourceLocation) {
        if self.line_has_content {
            self.push_synthetic(TokenKind::Newline, at);
        }
        self.line_has_content = false;
        self.skip_line = false;
    }

    fn finish(mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        let end = self.locate(self.source.len());
        if self.line_has_content {
            self.push_synthetic(TokenKind::Newline, end);
        }
        while self.indent_stack.len() > 1 {
            self.indent_stack.pop();
            self.push_synthetic(TokenKind::Dedent, end);
        }
        (self.tokens, self.diagnostics)
    }
}

/// Convert a raw token into its public kind. `None` for raw shapes that only
/// yield diagnostics.
fn convert(raw: RawToken) -> Option<TokenKind> {
    let kind = match raw {
        RawToken::Newline | RawToken::UnterminatedComment => return None,
        RawToken::DocAttribute((name, value)) => TokenKind::DocAttribute { name, value },
        RawToken::Row(RowLine::Cells(cells)) => TokenKind::TableRow(cells),
        RawToken::Row(RowLine::Separator) => TokenKind::TableSeparator,
        RawToken::Branch(text) => TokenKind::TreeBranch(text),
        RawToken::Leaf(text) => TokenKind::TreeLeaf(text),
        RawToken::Id(name) => TokenKind::Id(name),
        RawToken::Binding(path) => TokenKind::Binding(path),
        RawToken::Navigation(target) => TokenKind::Navigation(target),
        RawToken::Icon(name) => TokenKind::Icon(name),
        RawToken::Attribute((name, value)) => TokenKind::Attribute { name, value },
        RawToken::Close(word) => TokenKind::Close(word),
        RawToken::Str(text) => TokenKind::Str(text),
        RawToken::Number(value) => TokenKind::Number(value),
        RawToken::Word(word) => match keyword_spec(&word) {
            Some(spec) => TokenKind::Keyword(spec.kind),
            None => TokenKind::Word(word),
        },
    };
    Some(kind)
}

/// Tokenize a source file.
///
/// Returns every token plus every lexical diagnostic found in one pass.
/// INDENT and DEDENT tokens are balanced for any input, including inputs
/// with errors.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut layer = Layer::new(source);

    for (result, span) in RawToken::lexer(source).spanned() {
        let start = layer.locate(span.start);

        let raw = match result {
            Ok(RawToken::Newline) => {
                layer.end_line(start);
                continue;
            }
            Ok(raw) => raw,
            Err(()) => {
                if !layer.skip_line {
                    let offending = source[span.start..span.end].chars().next().unwrap_or('?');
                    layer.diagnostics.push(Diagnostic::lexical(
                        format!("unrecognized character '{}'", offending.escape_default()),
                        start,
                    ));
                    layer.skip_line = true;
                }
                continue;
            }
        };

        if layer.skip_line {
            continue;
        }

        if matches!(raw, RawToken::UnterminatedComment) {
            layer
                .diagnostics
                .push(Diagnostic::lexical("unterminated block comment", start));
            continue;
        }

        let Some(kind) = convert(raw) else { continue };

        if !layer.line_has_content {
            let indent_column = layer.line_indent_column(start.line);
            layer.resolve_indent(indent_column, start);
            layer.line_has_content = true;
        }

        let end = layer.locate(span.end);
        layer.tokens.push(Token {
            kind,
            text: source[span.start..span.end].to_string(),
            start,
            end,
        });
    }

    layer.finish()
}
