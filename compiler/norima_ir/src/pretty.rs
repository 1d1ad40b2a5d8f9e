//! Indented tree rendering of a program.

use std::fmt;

use crate::arena::ExprId;
use crate::ast::{Expr, Program, Stmt};

const INDENT: &str = "  ";

/// Display adapter returned by [`Program::tree`].
pub struct ProgramTree<'a> {
    program: &'a Program,
}

impl<'a> ProgramTree<'a> {
    pub(crate) fn new(program: &'a Program) -> Self {
        ProgramTree { program }
    }

    fn write_stmt(&self, f: &mut fmt::Formatter<'_>, stmt: &Stmt, depth: usize) -> fmt::Result {
        indent(f, depth)?;
        match stmt {
            Stmt::Let { name, expr } => {
                writeln!(f, "let {name}")?;
                self.write_expr(f, *expr, depth + 1)
            }
            Stmt::FnDef(def) => {
                writeln!(f, "fn {}({})", def.name, def.params.join(", "))?;
                def.body
                    .iter()
                    .try_for_each(|s| self.write_stmt(f, s, depth + 1))
            }
            Stmt::Return { expr } => {
                writeln!(f, "return")?;
                self.write_expr(f, *expr, depth + 1)
            }
            Stmt::Expr { expr } => {
                writeln!(f, "expr")?;
                self.write_expr(f, *expr, depth + 1)
            }
        }
    }

    fn write_expr(&self, f: &mut fmt::Formatter<'_>, id: ExprId, depth: usize) -> fmt::Result {
        indent(f, depth)?;
        match self.program.arena.get_expr(id) {
            Expr::Number(n) => writeln!(f, "number {n}"),
            Expr::Str(s) => writeln!(f, "string {s:?}"),
            Expr::Ident(name) => writeln!(f, "ident {name}"),
            Expr::Call { callee, args } => {
                writeln!(f, "call {callee}")?;
                args.iter()
                    .try_for_each(|arg| self.write_expr(f, *arg, depth + 1))
            }
            Expr::Binary { op, left, right } => {
                writeln!(f, "binary {op}")?;
                self.write_expr(f, *left, depth + 1)?;
                self.write_expr(f, *right, depth + 1)
            }
        }
    }
}

fn indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str(INDENT)?;
    }
    Ok(())
}

impl fmt::Display for ProgramTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.program.body {
            self.write_stmt(f, stmt, 0)?;
        }
        Ok(())
    }
}
