//! `InterpreterBuilder` for creating `Interpreter` instances.

use norima_ir::Program;

use super::Interpreter;
use crate::config::EvalConfig;
use crate::diagnostics::CallStack;
use crate::environment::Environment;
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Builder for `Interpreter`.
///
/// Defaults: a fresh environment, stdout output and `EvalConfig::default()`.
pub struct InterpreterBuilder<'a> {
    program: &'a Program,
    env: Option<Environment<'a>>,
    print_handler: Option<SharedPrintHandler>,
    config: EvalConfig,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(program: &'a Program) -> Self {
        Self {
            program,
            env: None,
            print_handler: None,
            config: EvalConfig::default(),
        }
    }

    /// Set the initial environment.
    ///
    /// Bindings already in its root frame are visible to the program.
    #[must_use]
    pub fn env(mut self, env: Environment<'a>) -> Self {
        self.env = Some(env);
        self
    }

    /// Set where `print` writes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    #[must_use]
    pub fn config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            program: self.program,
            env: self.env.unwrap_or_default(),
            call_stack: CallStack::new(self.config.max_call_depth),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            config: self.config,
        }
    }
}
