//! Parse error types.

use norima_ir::Token;

/// Syntax error.
///
/// Carries the offending token (or an end-of-input marker) and a short
/// description of what the parser was looking for. There is no source
/// location: tokens do not carry spans.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: Token,
    },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("invalid number literal `{text}`")]
    InvalidNumber { text: String },
}

impl ParseError {
    /// Build the right error for "wanted `expected`, got `found`".
    #[cold]
    pub(crate) fn expected(expected: &'static str, found: Option<&Token>) -> Self {
        match found {
            Some(token) => ParseError::UnexpectedToken {
                expected,
                found: token.clone(),
            },
            None => ParseError::UnexpectedEof { expected },
        }
    }
}
