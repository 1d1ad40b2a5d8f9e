//! Grammar productions.
//!
//! - `stmt.rs`: `let`, `fn`, `return`, expression statements
//! - `expr.rs`: precedence climbing, primaries, calls

mod expr;
mod stmt;
