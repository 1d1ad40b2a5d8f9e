//! Arena allocation for the flat AST.
//!
//! - Contiguous storage for all expressions of a program
//! - Child references use `ExprId` indices
//! - Bulk deallocation when the `Program` is dropped

use std::fmt;

use crate::ast::Expr;

/// Index of an expression in an `ExprArena`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

/// Contiguous storage for all expressions in a program.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExprArena {
    exprs: Vec<Expr>,
}

impl ExprArena {
    /// Create a new empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with estimated capacity based on token count.
    /// Heuristic: roughly one expression per two tokens.
    pub fn with_capacity(token_count: usize) -> Self {
        ExprArena {
            exprs: Vec::with_capacity(token_count / 2),
        }
    }

    /// Allocate an expression, returning its id.
    ///
    /// # Panics
    /// Panics if the arena exceeds `u32::MAX` expressions.
    #[inline]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let index = u32::try_from(self.exprs.len())
            .unwrap_or_else(|_| panic!("expression arena exceeded {} entries", u32::MAX));
        self.exprs.push(expr);
        ExprId(index)
    }

    /// Get an expression by id.
    ///
    /// Ids are only minted by `alloc_expr`, so an out-of-range id means the
    /// id came from a different arena.
    #[inline]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::ExprId;
    crate::static_assert_size!(ExprId, 4);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_and_get() {
        let mut arena = ExprArena::new();
        let a = arena.alloc_expr(Expr::Number(1.0));
        let b = arena.alloc_expr(Expr::Ident("x".to_string()));

        assert_eq!(arena.len(), 2);
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(arena.get_expr(a), &Expr::Number(1.0));
        assert_eq!(arena.get_expr(b), &Expr::Ident("x".to_string()));
    }

    #[test]
    fn test_empty() {
        let arena = ExprArena::with_capacity(64);
        assert!(arena.is_empty());
    }
}
