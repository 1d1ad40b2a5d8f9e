//! Norimac - host boundary for the Norima interpreter.
//!
//! `run_file` is the one entry point front ends need: it reads a source
//! file, runs the lex → parse → eval pipeline, reports any failure and maps
//! the outcome to a process exit code.

pub mod commands;
mod run;
mod tracing_setup;

pub use run::{
    parse_source, run_file, run_file_with, run_source, RunError, RunOptions, ENV_MAX_DEPTH,
    ENV_SCOPING, EXIT_FAILURE, EXIT_SUCCESS, EXIT_USAGE,
};
pub use tracing_setup::init_tracing;
