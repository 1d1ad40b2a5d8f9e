//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch: the type set is fixed, so pattern matching
//! gives exhaustiveness checking for free.
//!
//! Operand rules:
//! - number `op` number: IEEE-754 arithmetic. Division by zero yields
//!   `inf` or `NaN`; there is no guard.
//! - string `+` string: concatenation.
//! - anything else: `InvalidOperands`. There is no implicit coercion
//!   between strings and numbers.
//! - `=` is rejected regardless of operands, after both have been
//!   evaluated.

use norima_ir::BinaryOp;

use crate::errors::{assignment_in_expression, invalid_operands, EvalResult};
use crate::Value;

/// Evaluate a binary operation on already-evaluated operands.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    let arith: fn(f64, f64) -> f64 = match op {
        BinaryOp::Add => |a, b| a + b,
        BinaryOp::Sub => |a, b| a - b,
        BinaryOp::Mul => |a, b| a * b,
        BinaryOp::Div => |a, b| a / b,
        BinaryOp::Assign => return Err(assignment_in_expression()),
    };

    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(arith(a, b))),
        (Value::Str(a), Value::Str(b)) if op == BinaryOp::Add => Ok(concat(a, &b)),
        (left, right) => Err(invalid_operands(op, &left, &right)),
    }
}

fn concat(mut a: String, b: &str) -> Value {
    a.push_str(b);
    Value::Str(a)
}
