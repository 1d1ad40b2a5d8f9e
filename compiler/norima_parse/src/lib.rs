//! Recursive descent parser for Norima.
//!
//! Consumes the lexer's `Vec<Token>` and produces a single `Program`.
//! Statements are dispatched on one token of lookahead (the contextual
//! keywords `let`, `fn`, `return`); binary expressions use precedence
//! climbing over the table in [`BinaryOp::precedence`](norima_ir::BinaryOp::precedence).

mod cursor;
mod error;
mod grammar;

use cursor::Cursor;
use norima_ir::{ExprArena, Program, Token};
use tracing::debug;

pub use error::ParseError;

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: ExprArena,
}

impl<'a> Parser<'a> {
    /// Create a new parser over a token slice.
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            arena: ExprArena::with_capacity(tokens.len()),
        }
    }

    /// Parse the whole token stream as a program.
    ///
    /// Stops at the first syntax error; there is no recovery.
    pub fn parse_program(mut self) -> Result<Program, ParseError> {
        let mut body = Vec::new();
        while !self.cursor.is_at_end() {
            body.push(self.parse_stmt()?);
        }

        debug!(
            tokens = self.cursor.token_count(),
            statements = body.len(),
            exprs = self.arena.len(),
            "parsed program"
        );
        Ok(Program::new(self.arena, body))
    }
}

/// Parse tokens into a `Program`.
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    Parser::new(tokens).parse_program()
}
