//! The `run` command.

use std::path::Path;

use crate::run::{run_file_with, RunOptions, EXIT_USAGE};

/// Run a Norima source file with options taken from the environment.
///
/// A path that does not exist is a usage error (exit 2), distinct from a
/// file that exists but fails to run (exit 1).
pub fn run_command(path: &str) -> i32 {
    if !Path::new(path).exists() {
        eprintln!("error: file not found: {path}");
        return EXIT_USAGE;
    }
    run_file_with(path, &RunOptions::from_env())
}
