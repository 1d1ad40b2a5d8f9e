//! Norima IR - Tokens and syntax tree types
//!
//! This crate contains the core data structures shared by every stage of
//! the Norima pipeline:
//! - Tokens produced by the lexer (`Token`, `TokenKind`)
//! - AST nodes (`Program`, `Stmt`, `Expr`, `FnDef`, `BinaryOp`)
//! - Arena allocation for expressions (`ExprArena`, `ExprId`)
//!
//! # Design Philosophy
//!
//! - **Flatten expressions**: no `Box<Expr>`, children are `ExprId(u32)` indices
//!   into the program's `ExprArena`.
//! - **Closed variant sets**: every node kind is an exhaustive enum, so the
//!   evaluator cannot be handed a shape it does not know about.
//! - **Immutable after construction**: the parser is the only writer.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod pretty;
mod token;

pub use arena::{ExprArena, ExprId};
pub use ast::{BinaryOp, Expr, FnDef, Program, Stmt};
pub use pretty::ProgramTree;
pub use token::{keywords, Token, TokenKind};
