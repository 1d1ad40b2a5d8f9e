//! Debugging commands: dump the token stream or the parsed tree.

use norima_ir::Token;

use super::read_file;
use crate::run::{RunError, RunOptions, EXIT_FAILURE, EXIT_SUCCESS};

fn report(err: &RunError) -> i32 {
    err.report(&RunOptions::default());
    EXIT_FAILURE
}

fn tokenize_file(path: &str) -> Result<Vec<Token>, RunError> {
    let content = read_file(path)?;
    Ok(norima_lexer::tokenize(&content)?)
}

/// Print every token in `path`, one per line.
pub fn lex_file(path: &str) -> i32 {
    let tokens = match tokenize_file(path) {
        Ok(tokens) => tokens,
        Err(err) => return report(&err),
    };

    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    for token in &tokens {
        println!("  {:?} {}", token.kind, token);
    }
    EXIT_SUCCESS
}

/// Print the syntax tree of `path`.
pub fn parse_file(path: &str) -> i32 {
    let result = tokenize_file(path)
        .and_then(|tokens| norima_parse::parse(&tokens).map_err(RunError::from));
    match result {
        Ok(program) => {
            println!("Program for '{}' ({} statements):", path, program.body.len());
            print!("{}", program.tree());
            EXIT_SUCCESS
        }
        Err(err) => report(&err),
    }
}
