//! Token stream cursor
//!
//! A thin window over the lexed token slice. Returned token references
//! borrow the slice, not the cursor, so productions can hold a token while
//! continuing to advance.

use std::mem::discriminant;
use wiremark_ast::SourceLocation;
use wiremark_lexer::{Token, TokenKind};

pub(crate) struct TokenStream<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> TokenStream<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Current token without consuming it.
    pub fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    /// Current token kind without consuming it.
    pub fn peek_kind(&self) -> Option<&'t TokenKind> {
        self.peek().map(|t| &t.kind)
    }

    /// Consume and return the current token.
    pub fn advance(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// True when the current token has the same discriminant as `kind`
    /// (payloads are ignored).
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.peek_kind()
            .is_some_and(|k| discriminant(k) == discriminant(kind))
    }

    /// Consume the current token when it matches `kind`.
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Skip any run of Newline tokens.
    pub fn skip_newlines(&mut self) {
        while self.check(&TokenKind::Newline) {
            self.pos += 1;
        }
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Location of the current token, or end of input.
    pub fn location(&self) -> SourceLocation {
        match self.peek() {
            Some(token) => token.start,
            None => self
                .tokens
                .last()
                .map(|t| t.end)
                .unwrap_or_else(SourceLocation::origin),
        }
    }

    /// End location of the most recently consumed token.
    pub fn prev_end(&self) -> SourceLocation {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map(|t| t.end)
            .unwrap_or_else(SourceLocation::origin)
    }

    /// Error recovery: drop tokens until just past the next Newline,
    /// stopping short of Indent/Dedent so block structure is preserved.
    pub fn synchronize_line(&mut self) {
        while let Some(kind) = self.peek_kind() {
            match kind {
                TokenKind::Newline => {
                    self.pos += 1;
                    return;
                }
                TokenKind::Indent | TokenKind::Dedent => return,
                _ => self.pos += 1,
            }
        }
    }
}
