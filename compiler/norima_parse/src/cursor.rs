//! Token cursor for navigating the token stream.
//!
//! Provides single-token lookahead, consumption, and `expect_*` helpers.
//! The token list has no EOF sentinel; running off the end is `None`.

use norima_ir::{Token, TokenKind};
use tracing::trace;

use crate::ParseError;

pub(crate) struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub(crate) fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Get the current token, or `None` at end of input.
    #[inline]
    pub(crate) fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|t| t.kind)
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    #[inline]
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    /// Check if the current token is the contextual keyword `keyword`.
    #[inline]
    pub(crate) fn check_keyword(&self, keyword: &str) -> bool {
        self.current().is_some_and(|t| t.is_keyword(keyword))
    }

    /// Consume the current token.
    pub(crate) fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        trace!(pos = self.pos, token = %token, "advance");
        self.pos += 1;
        Some(token)
    }

    /// Consume a token of `kind` or fail.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            if let Some(token) = self.advance() {
                return Ok(token);
            }
        }
        Err(ParseError::expected(kind.describe(), self.current()))
    }

    /// Consume an identifier and return its name.
    pub(crate) fn expect_ident(&mut self) -> Result<String, ParseError> {
        self.expect(TokenKind::Ident).map(|t| t.text.clone())
    }
}
