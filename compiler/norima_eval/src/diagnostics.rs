//! Call stack tracking for the evaluator.
//!
//! `CallStack` enforces the recursion limit and captures the chain of
//! active user function calls when an error is raised.

use crate::errors::{recursion_limit_exceeded, EvalBacktrace, EvalError};

/// Live call stack of user function names.
#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<String>,
    max_depth: Option<usize>,
}

impl CallStack {
    /// Create an empty call stack. `None` means unlimited depth.
    pub fn new(max_depth: Option<usize>) -> Self {
        CallStack {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a call frame, checking the depth limit.
    ///
    /// The frame is NOT pushed on overflow.
    pub fn push(&mut self, name: &str) -> Result<(), EvalError> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                return Err(recursion_limit_exceeded(max));
            }
        }
        self.frames.push(name.to_string());
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(!self.frames.is_empty(), "CallStack::pop() called on empty stack");
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Snapshot of the active calls, most recent first.
    pub fn capture(&self) -> EvalBacktrace {
        EvalBacktrace {
            frames: self.frames.iter().rev().cloned().collect(),
        }
    }
}
