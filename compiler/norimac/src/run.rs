//! Running programs: source text in, exit code out.

use std::path::Path;

use norima_eval::{
    stdout_handler, EvalConfig, EvalError, InterpreterBuilder, Scoping, SharedPrintHandler,
};
use norima_ir::Program;
use norima_lexer::LexError;
use norima_parse::ParseError;
use tracing::{debug, warn};

pub const EXIT_SUCCESS: i32 = 0;
/// Any failure while reading, parsing or running a program.
pub const EXIT_FAILURE: i32 = 1;
/// Bad command-line usage. Used by front ends only.
pub const EXIT_USAGE: i32 = 2;

/// Overrides `EvalConfig::scoping` (`dynamic` or `lexical`).
pub const ENV_SCOPING: &str = "NORIMA_SCOPING";
/// Overrides `EvalConfig::max_call_depth` (a number, or `unlimited`).
pub const ENV_MAX_DEPTH: &str = "NORIMA_MAX_DEPTH";

/// Settings for one run.
#[derive(Clone)]
pub struct RunOptions {
    pub config: EvalConfig,
    /// Receives `print` output and the `Runtime error:` report.
    pub print_handler: SharedPrintHandler,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            config: EvalConfig::default(),
            print_handler: stdout_handler(),
        }
    }
}

impl RunOptions {
    /// Defaults, overridden by `NORIMA_SCOPING` and `NORIMA_MAX_DEPTH`.
    pub fn from_env() -> Self {
        let scoping = std::env::var(ENV_SCOPING).ok();
        let max_depth = std::env::var(ENV_MAX_DEPTH).ok();
        RunOptions::default().with_overrides(scoping.as_deref(), max_depth.as_deref())
    }

    /// Apply textual overrides. Unrecognized values are logged and ignored.
    #[must_use]
    pub fn with_overrides(mut self, scoping: Option<&str>, max_depth: Option<&str>) -> Self {
        if let Some(raw) = scoping {
            match Scoping::parse(raw.trim()) {
                Some(scoping) => self.config.scoping = scoping,
                None => warn!(var = ENV_SCOPING, value = raw, "ignoring unknown scoping mode"),
            }
        }
        if let Some(raw) = max_depth {
            let raw = raw.trim();
            if raw.eq_ignore_ascii_case("unlimited") {
                self.config.max_call_depth = None;
            } else {
                match raw.parse::<usize>() {
                    Ok(depth) => self.config.max_call_depth = Some(depth),
                    Err(_) => warn!(var = ENV_MAX_DEPTH, value = raw, "ignoring invalid call depth"),
                }
            }
        }
        self
    }
}

/// Why a run failed.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Runtime(#[from] EvalError),
}

impl RunError {
    /// Report the failure the way `run_file` does.
    ///
    /// Runtime errors go through the print handler (stdout by default) as
    /// `Runtime error: <description>`; everything else goes to stderr.
    pub fn report(&self, options: &RunOptions) {
        match self {
            RunError::Runtime(err) => {
                if let Some(trace) = &err.trace {
                    debug!(backtrace = %trace, "runtime error backtrace");
                }
                options.print_handler.println(&format!("Runtime error: {err}"));
            }
            RunError::Io { .. } | RunError::Lex(_) | RunError::Parse(_) => {
                eprintln!("error: {self}");
            }
        }
    }
}

/// Lex and parse `source`.
pub fn parse_source(source: &str) -> Result<Program, RunError> {
    let tokens = norima_lexer::tokenize(source)?;
    debug!(tokens = tokens.len(), "lexed source");
    Ok(norima_parse::parse(&tokens)?)
}

/// Parse and evaluate `source` in a fresh environment.
pub fn run_source(source: &str, options: &RunOptions) -> Result<(), RunError> {
    let program = parse_source(source)?;
    let mut interpreter = InterpreterBuilder::new(&program)
        .print_handler(options.print_handler.clone())
        .config(options.config.clone())
        .build();
    interpreter.eval_program()?;
    Ok(())
}

/// Run a source file with default options and return the exit code.
pub fn run_file(path: impl AsRef<Path>) -> i32 {
    run_file_with(path, &RunOptions::default())
}

/// Run a source file and return the exit code, reporting any failure.
pub fn run_file_with(path: impl AsRef<Path>, options: &RunOptions) -> i32 {
    let path = path.as_ref();
    debug!(path = %path.display(), "running file");

    let result = std::fs::read_to_string(path)
        .map_err(|source| RunError::Io {
            path: path.display().to_string(),
            source,
        })
        .and_then(|source| run_source(&source, options));

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            err.report(options);
            EXIT_FAILURE
        }
    }
}
