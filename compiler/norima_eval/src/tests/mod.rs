//! Shared helpers for evaluator tests.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]


use norima_ir::Program;

use crate::{buffer_handler, EvalConfig, EvalError, InterpreterBuilder};

pub(crate) fn parse(source: &str) -> Program {
    let tokens = norima_lexer::tokenize(source).unwrap();
    norima_parse::parse(&tokens).unwrap()
}

/// Run `source` with `config`, returning captured output and the result.
pub(crate) fn run_with(source: &str, config: EvalConfig) -> (String, Result<(), EvalError>) {
    let program = parse(source);
    let handler = buffer_handler();
    let mut interpreter = InterpreterBuilder::new(&program)
        .print_handler(handler.clone())
        .config(config)
        .build();
    let result = interpreter.eval_program();
    (handler.get_output(), result)
}

/// Run `source` with default settings and return its output.
pub(crate) fn run_ok(source: &str) -> String {
    let (output, result) = run_with(source, EvalConfig::default());
    result.unwrap();
    output
}

/// Run `source` with default settings and return the error it fails with.
pub(crate) fn run_err(source: &str) -> EvalError {
    run_with(source, EvalConfig::default()).1.unwrap_err()
}
