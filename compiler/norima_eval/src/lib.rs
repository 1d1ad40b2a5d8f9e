//! Norima Eval - tree-walking evaluator for Norima programs.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Environment`: arena of binding frames linked by parent handles
//! - `evaluate_binary`: direct enum-based binary operator dispatch
//! - `ControlFlow`: explicit `Normal`/`Return` result of each statement
//! - `CallStack`: recursion limit and error backtraces
//! - `PrintHandlerImpl`: where `print` output goes

pub mod config;
mod diagnostics;
mod environment;
pub mod errors;
pub mod interpreter;
mod operators;
mod print_handler;
mod value;

pub use config::{EvalConfig, Scoping, DEFAULT_MAX_CALL_DEPTH};
pub use diagnostics::CallStack;
pub use environment::{EnvId, Environment};
pub use errors::{EvalBacktrace, EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{ControlFlow, Interpreter, InterpreterBuilder};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
};
pub use value::Value;

#[cfg(test)]
mod tests;
