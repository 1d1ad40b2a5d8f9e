//! Statement parsing.

use norima_ir::{keywords, FnDef, Stmt, TokenKind};
use norima_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse one statement.
    ///
    /// Function bodies nest statements, so this is a recursion point.
    pub(crate) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        ensure_sufficient_stack(|| self.parse_stmt_inner())
    }

    fn parse_stmt_inner(&mut self) -> Result<Stmt, ParseError> {
        if self.cursor.check_keyword(keywords::LET) {
            return self.parse_let();
        }
        if self.cursor.check_keyword(keywords::FN) {
            return self.parse_fn_def().map(Stmt::FnDef);
        }
        if self.cursor.check_keyword(keywords::RETURN) {
            return self.parse_return();
        }

        let expr = self.parse_expr()?;
        self.cursor.expect(TokenKind::Semicolon)?;
        Ok(Stmt::Expr { expr })
    }

    /// `let` IDENT `=` expr `;`
    fn parse_let(&mut self) -> Result<Stmt, ParseError> {
        self.cursor.advance();
        let name = self.cursor.expect_ident()?;
        self.cursor.expect(TokenKind::Eq)?;
        let expr = self.parse_expr()?;
        self.cursor.expect(TokenKind::Semicolon)?;
        Ok(Stmt::Let { name, expr })
    }

    /// `fn` IDENT `(` [IDENT (`,` IDENT)*] `)` `{` stmt* `}`
    fn parse_fn_def(&mut self) -> Result<FnDef, ParseError> {
        self.cursor.advance();
        let name = self.cursor.expect_ident()?;

        self.cursor.expect(TokenKind::LParen)?;
        let mut params = Vec::new();
        if self.cursor.check(TokenKind::Ident) {
            params.push(self.cursor.expect_ident()?);
            while self.cursor.check(TokenKind::Comma) {
                self.cursor.advance();
                params.push(self.cursor.expect_ident()?);
            }
        }
        self.cursor.expect(TokenKind::RParen)?;

        self.cursor.expect(TokenKind::LBrace)?;
        let mut body = Vec::new();
        while !self.cursor.check(TokenKind::RBrace) {
            if self.cursor.is_at_end() {
                return Err(ParseError::UnexpectedEof {
                    expected: TokenKind::RBrace.describe(),
                });
            }
            body.push(self.parse_stmt()?);
        }
        self.cursor.expect(TokenKind::RBrace)?;

        Ok(FnDef { name, params, body })
    }

    /// `return` expr `;`
    fn parse_return(&mut self) -> Result<Stmt, ParseError> {
        self.cursor.advance();
        let expr = self.parse_expr()?;
        self.cursor.expect(TokenKind::Semicolon)?;
        Ok(Stmt::Return { expr })
    }
}
