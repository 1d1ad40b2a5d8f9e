//! AST node types.
//!
//! Statements own their child statements directly (function bodies are
//! short and never shared); expressions live in the program's `ExprArena`.

use std::fmt;

use crate::arena::{ExprArena, ExprId};
use crate::pretty::ProgramTree;
use crate::token::TokenKind;

/// Binary operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    /// `=` in expression position. Parsed for completeness; the evaluator
    /// always rejects it.
    Assign,
}

impl BinaryOp {
    /// Map an operator token to its binary operator. `,` is not a binary
    /// operator: it only separates arguments and parameters.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::Eq => Some(BinaryOp::Assign),
            _ => None,
        }
    }

    /// Binding power for precedence climbing. Higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Mul | BinaryOp::Div => 20,
            BinaryOp::Add | BinaryOp::Sub => 10,
            BinaryOp::Assign => 1,
        }
    }

    pub fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Assign => "=",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Expression node.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Number(f64),
    Str(String),
    Ident(String),
    /// `callee(args...)`. Callees are always plain names.
    Call { callee: String, args: Vec<ExprId> },
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
}

/// A function definition: `fn name(params) { body }`.
#[derive(Clone, Debug, PartialEq)]
pub struct FnDef {
    pub name: String,
    pub params: Vec<String>,
    pub body: Vec<Stmt>,
}

/// Statement node.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    /// `let name = expr;` - creates or overwrites a local binding.
    Let { name: String, expr: ExprId },
    FnDef(FnDef),
    /// `return expr;`
    Return { expr: ExprId },
    /// `expr;` - evaluated for side effects, value discarded.
    Expr { expr: ExprId },
}

/// A parsed program: the expression arena plus top-level statements.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    pub arena: ExprArena,
    pub body: Vec<Stmt>,
}

impl Program {
    pub fn new(arena: ExprArena, body: Vec<Stmt>) -> Self {
        Program { arena, body }
    }

    /// Indented tree rendering, for `norima parse` and tests.
    pub fn tree(&self) -> ProgramTree<'_> {
        ProgramTree::new(self)
    }
}
