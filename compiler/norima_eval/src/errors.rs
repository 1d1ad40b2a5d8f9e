//! Evaluation errors.
//!
//! Factory functions (e.g. `undefined_variable()`) are the public way to
//! build errors; they keep message wording in one place.

use std::fmt;

use norima_ir::BinaryOp;

use crate::Value;

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("undefined variable: {name}")]
    UndefinedVariable { name: String },

    #[error("undefined function: {name}")]
    UndefinedFunction { name: String },

    /// Operator applied to operand types it cannot combine.
    #[error("operator `{op}` cannot be applied to {left} and {right}")]
    InvalidOperands {
        op: BinaryOp,
        left: &'static str,
        right: &'static str,
    },

    /// `=` evaluated in expression position.
    #[error("assignment operator `=` is not supported in expressions")]
    AssignmentInExpression,

    /// A `return` signal reached the top level.
    #[error("`return` outside of a function")]
    ReturnOutsideFunction,

    #[error("maximum recursion depth of {max} exceeded")]
    RecursionLimit { max: usize },
}

/// Function names on the call stack when an error was raised, most recent
/// call first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    pub frames: Vec<String>,
}

impl EvalBacktrace {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl fmt::Display for EvalBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.frames.iter().enumerate() {
            if i > 0 {
                f.write_str(" <- ")?;
            }
            write!(f, "{name}()")?;
        }
        Ok(())
    }
}

/// A runtime failure. Always fatal to the run.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Populated by the interpreter when the error crosses a call boundary.
    pub trace: Option<EvalBacktrace>,
}

impl EvalError {
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            trace: None,
        }
    }

    /// Attach a backtrace unless one is already present (the innermost
    /// capture wins).
    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        if self.trace.is_none() && !backtrace.is_empty() {
            self.trace = Some(backtrace);
        }
        self
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::from_kind(kind)
    }
}

// Variable and Function Errors

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn undefined_function(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedFunction {
        name: name.to_string(),
    })
}

// Operator Errors

#[cold]
pub fn invalid_operands(op: BinaryOp, left: &Value, right: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidOperands {
        op,
        left: left.type_name(),
        right: right.type_name(),
    })
}

#[cold]
pub fn assignment_in_expression() -> EvalError {
    EvalError::from_kind(EvalErrorKind::AssignmentInExpression)
}

// Control Flow Errors

#[cold]
pub fn return_outside_function() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ReturnOutsideFunction)
}

#[cold]
pub fn recursion_limit_exceeded(max: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RecursionLimit { max })
}
