//! Command handlers for the `norima` CLI.
//!
//! Each handler returns the process exit code instead of exiting, so the
//! binary stays a thin dispatcher.

mod debug;
mod run;

pub use debug::{lex_file, parse_file};
pub use run::run_command;

use crate::run::RunError;

/// Read a source file, mapping failure to `RunError::Io`.
fn read_file(path: &str) -> Result<String, RunError> {
    std::fs::read_to_string(path).map_err(|source| RunError::Io {
        path: path.to_string(),
        source,
    })
}
