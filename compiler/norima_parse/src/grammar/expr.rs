//! Expression parsing.
//!
//! Precedence climbing: a primary, then any number of binary operators
//! whose precedence is at least `min_prec`. The right operand is parsed at
//! `prec + 1`, which makes every level left-associative.

use norima_ir::{BinaryOp, Expr, ExprId, TokenKind};
use norima_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseError, Parser};

const EXPECTED_EXPR: &str = "an expression";

impl Parser<'_> {
    /// Parse a full expression.
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        self.parse_expr_prec(0)
    }

    fn parse_expr_prec(&mut self, min_prec: u8) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| {
            let mut left = self.parse_primary()?;

            while let Some(op) = self.cursor.current_kind().and_then(BinaryOp::from_token) {
                let prec = op.precedence();
                if prec < min_prec {
                    break;
                }
                self.cursor.advance();
                trace!(%op, prec, "binary operator");

                let right = self.parse_expr_prec(prec + 1)?;
                left = self.arena.alloc_expr(Expr::Binary { op, left, right });
            }

            Ok(left)
        })
    }

    /// Literals, identifiers, calls, and parenthesized expressions.
    fn parse_primary(&mut self) -> Result<ExprId, ParseError> {
        let Some(token) = self.cursor.current() else {
            return Err(ParseError::UnexpectedEof {
                expected: EXPECTED_EXPR,
            });
        };

        match token.kind {
            TokenKind::Number => {
                self.cursor.advance();
                let value = token
                    .text
                    .parse::<f64>()
                    .map_err(|_| ParseError::InvalidNumber {
                        text: token.text.clone(),
                    })?;
                Ok(self.arena.alloc_expr(Expr::Number(value)))
            }
            TokenKind::String => {
                self.cursor.advance();
                Ok(self.arena.alloc_expr(Expr::Str(token.text.clone())))
            }
            TokenKind::Ident => {
                self.cursor.advance();
                if self.cursor.check(TokenKind::LParen) {
                    let args = self.parse_call_args()?;
                    return Ok(self.arena.alloc_expr(Expr::Call {
                        callee: token.text.clone(),
                        args,
                    }));
                }
                Ok(self.arena.alloc_expr(Expr::Ident(token.text.clone())))
            }
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                self.cursor.expect(TokenKind::RParen)?;
                Ok(inner)
            }
            _ => Err(ParseError::UnexpectedToken {
                expected: EXPECTED_EXPR,
                found: token.clone(),
            }),
        }
    }

    /// `(` [expr (`,` expr)*] `)`
    fn parse_call_args(&mut self) -> Result<Vec<ExprId>, ParseError> {
        self.cursor.expect(TokenKind::LParen)?;
        let mut args = Vec::new();
        if !self.cursor.check(TokenKind::RParen) {
            args.push(self.parse_expr()?);
            while self.cursor.check(TokenKind::Comma) {
                self.cursor.advance();
                args.push(self.parse_expr()?);
            }
        }
        self.cursor.expect(TokenKind::RParen)?;
        Ok(args)
    }
}
