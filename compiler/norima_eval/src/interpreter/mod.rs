//! Tree-walking interpreter.
//!
//! Statements run in order against an `Environment`. `return` travels back
//! up the Rust call chain as `ControlFlow::Return` rather than as an error,
//! so only real failures use the `Err` path.

mod builder;

pub use builder::InterpreterBuilder;

use norima_ir::{keywords, Expr, ExprArena, ExprId, FnDef, Program, Stmt};
use norima_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::config::{EvalConfig, Scoping};
use crate::diagnostics::CallStack;
use crate::environment::{EnvId, Environment};
use crate::errors::{
    return_outside_function, undefined_function, undefined_variable, EvalError, EvalResult,
};
use crate::operators::evaluate_binary;
use crate::print_handler::SharedPrintHandler;
use crate::Value;

/// Outcome of executing a statement.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlFlow {
    /// Continue with the next statement.
    Normal,
    /// Unwind to the nearest enclosing call, carrying its result.
    Return(Value),
}

type ExecResult = Result<ControlFlow, EvalError>;

/// Evaluator for one program run.
pub struct Interpreter<'a> {
    program: &'a Program,
    env: Environment<'a>,
    call_stack: CallStack,
    print_handler: SharedPrintHandler,
    config: EvalConfig,
}

impl<'a> Interpreter<'a> {
    #[inline]
    fn arena(&self) -> &'a ExprArena {
        &self.program.arena
    }

    /// The environment, including root bindings left by the last run.
    pub fn env(&self) -> &Environment<'a> {
        &self.env
    }

    /// Run every top-level statement in order.
    ///
    /// A `return` that reaches the top level is an error.
    pub fn eval_program(&mut self) -> Result<(), EvalError> {
        let program = self.program;
        let root = self.env.root();
        debug!(
            statements = program.body.len(),
            scoping = ?self.config.scoping,
            "evaluating program"
        );
        match self.eval_block(&program.body, root)? {
            ControlFlow::Normal => Ok(()),
            ControlFlow::Return(_) => Err(return_outside_function()),
        }
    }

    /// Execute statements in `env` until one of them returns.
    fn eval_block(&mut self, stmts: &'a [Stmt], env: EnvId) -> ExecResult {
        for stmt in stmts {
            if let ControlFlow::Return(value) = self.eval_stmt(stmt, env)? {
                return Ok(ControlFlow::Return(value));
            }
        }
        Ok(ControlFlow::Normal)
    }

    /// Execute one statement in `env`.
    pub fn eval_stmt(&mut self, stmt: &'a Stmt, env: EnvId) -> ExecResult {
        match stmt {
            Stmt::Let { name, expr } => {
                let value = self.eval_expr(*expr, env)?;
                trace!(name = %name, value = %value, "let");
                self.env.set(env, name.as_str(), value);
                Ok(ControlFlow::Normal)
            }
            Stmt::FnDef(def) => {
                trace!(name = %def.name, params = def.params.len(), "define fn");
                self.env.define_fn(env, def);
                Ok(ControlFlow::Normal)
            }
            Stmt::Return { expr } => {
                let value = self.eval_expr(*expr, env)?;
                Ok(ControlFlow::Return(value))
            }
            Stmt::Expr { expr } => {
                self.eval_expr(*expr, env)?;
                Ok(ControlFlow::Normal)
            }
        }
    }

    /// Evaluate an expression in `env`.
    pub fn eval_expr(&mut self, id: ExprId, env: EnvId) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(id, env))
    }

    fn eval_expr_inner(&mut self, id: ExprId, env: EnvId) -> EvalResult {
        match self.arena().get_expr(id) {
            Expr::Number(n) => Ok(Value::Number(*n)),
            Expr::Str(s) => Ok(Value::string(s.as_str())),
            Expr::Ident(name) => self
                .env
                .get(env, name)
                .cloned()
                .ok_or_else(|| undefined_variable(name)),
            Expr::Binary { op, left, right } => {
                let left = self.eval_expr(*left, env)?;
                let right = self.eval_expr(*right, env)?;
                evaluate_binary(left, right, *op)
            }
            Expr::Call { callee, args } => {
                if callee == keywords::PRINT {
                    self.eval_print(args, env)
                } else {
                    self.eval_call(callee, args, env)
                }
            }
        }
    }

    /// Built-in `print`: arguments joined by a single space, then a newline.
    fn eval_print(&mut self, args: &'a [ExprId], env: EnvId) -> EvalResult {
        let mut line = String::new();
        for (i, arg) in args.iter().enumerate() {
            let value = self.eval_expr(*arg, env)?;
            if i > 0 {
                line.push(' ');
            }
            line.push_str(&value.to_string());
        }
        self.print_handler.println(&line);
        Ok(Value::Void)
    }

    /// Call a user function.
    ///
    /// Parameters are paired with arguments positionally. Unpaired
    /// parameters stay unbound and unpaired arguments are not evaluated.
    fn eval_call(&mut self, name: &str, args: &'a [ExprId], env: EnvId) -> EvalResult {
        let (def, owner) = self
            .env
            .get_fn(env, name)
            .ok_or_else(|| undefined_function(name))?;

        let mut bound = Vec::with_capacity(def.params.len().min(args.len()));
        for (param, arg) in def.params.iter().zip(args) {
            bound.push((param, self.eval_expr(*arg, env)?));
        }

        self.call_stack.push(&def.name)?;
        let parent = match self.config.scoping {
            Scoping::Dynamic => env,
            Scoping::Lexical => owner,
        };
        let frame = self.env.push_frame(parent);
        for (param, value) in bound {
            self.env.set(frame, param.as_str(), value);
        }
        trace!(name = %def.name, depth = self.call_stack.depth(), "call");

        let result = self.eval_body(def, frame);

        self.env.pop_frame(frame);
        self.call_stack.pop();
        result
    }

    fn eval_body(&mut self, def: &'a FnDef, frame: EnvId) -> EvalResult {
        match self.eval_block(&def.body, frame) {
            Ok(ControlFlow::Return(value)) => Ok(value),
            Ok(ControlFlow::Normal) => Ok(Value::Void),
            Err(err) => {
                let err = err.with_backtrace(self.call_stack.capture());
                debug!(function = %def.name, error = %err, "call failed");
                Err(err)
            }
        }
    }
}
