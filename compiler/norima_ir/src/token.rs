//! Lexer output types.
//!
//! A token is a `(kind, text)` pair. No source positions are kept: the
//! parser and evaluator report errors by token text only.

use std::fmt;

/// Contextual keywords.
///
/// These are lexed as ordinary identifiers and only recognized by the
/// parser (and, for `print`, the evaluator) in statement or call position.
pub mod keywords {
    pub const LET: &str = "let";
    pub const FN: &str = "fn";
    pub const RETURN: &str = "return";
    pub const PRINT: &str = "print";
}

/// Token kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Integer or decimal literal, no sign or exponent.
    Number,
    /// Double-quoted string literal; the token text excludes the quotes.
    String,
    /// `[A-Za-z_][A-Za-z0-9_]*`, including the contextual keywords.
    Ident,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Eq,
    Comma,

    // Delimiters
    LParen,
    RParen,
    LBrace,
    RBrace,
    Semicolon,
}

impl TokenKind {
    /// Human-readable description used in "expected ..." messages.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Number => "a number",
            TokenKind::String => "a string",
            TokenKind::Ident => "an identifier",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Eq => "`=`",
            TokenKind::Comma => "`,`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::Semicolon => "`;`",
        }
    }
}

/// A classified lexeme.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text of the token. String literals have their quotes stripped.
    pub text: String,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }

    /// Check whether this is the identifier `keyword`.
    #[inline]
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Ident && self.text == keyword
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::String => write!(f, "\"{}\"", self.text),
            _ => write!(f, "`{}`", self.text),
        }
    }
}
