//! Lexer for Norima using logos.
//!
//! Converts source text into an ordered `Vec<Token>`, discarding whitespace.
//! Keywords are not reserved here: `let`, `fn`, `return` and `print` come
//! out as identifiers and are recognized contextually by the parser.

use logos::Logos;
use norima_ir::{Token, TokenKind};

/// Raw token from logos (before conversion to `TokenKind`).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    #[regex(r"[0-9]+")]
    Int,

    #[regex(r"[0-9]+\.[0-9]+")]
    Float,

    // No escape sequences; a string ends at the next quote on the same line.
    #[regex(r#""[^"\n]*""#)]
    String,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("=")]
    Eq,
    #[token(",")]
    Comma,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(";")]
    Semicolon,
}

/// Lexical failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A character that starts no token. An unterminated string reports
    /// its opening quote.
    #[error("unexpected character {ch:?} at byte {offset}")]
    UnexpectedChar { ch: char, offset: usize },
}

/// Tokenize `source`.
///
/// Tokens are produced in source order. The first unrecognized character
/// aborts lexing.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let slice = lexer.slice();
        match result {
            Ok(raw) => tokens.push(convert_token(raw, slice)),
            Err(()) => {
                let offset = lexer.span().start;
                let ch = source[offset..].chars().next().unwrap_or('\0');
                return Err(LexError::UnexpectedChar { ch, offset });
            }
        }
    }

    Ok(tokens)
}

/// Convert a raw token to a `Token`, stripping string quotes.
fn convert_token(raw: RawToken, slice: &str) -> Token {
    let kind = match raw {
        RawToken::Int | RawToken::Float => TokenKind::Number,
        RawToken::String => {
            let content = &slice[1..slice.len() - 1];
            return Token::new(TokenKind::String, content);
        }
        RawToken::Ident => TokenKind::Ident,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Eq => TokenKind::Eq,
        RawToken::Comma => TokenKind::Comma,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Semicolon => TokenKind::Semicolon,
    };
    Token::new(kind, slice)
}

#[cfg(test)]
mod tests;
