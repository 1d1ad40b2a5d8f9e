//! Norima CLI

use norimac::commands::{lex_file, parse_file, run_command};
use norimac::{init_tracing, EXIT_USAGE};

/// Source file extension accepted by the `norima <file>` shorthand.
const SOURCE_EXT: &str = ".norm";

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(EXIT_USAGE);
    }

    let command = &args[1];

    let code = match command.as_str() {
        "run" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: norima run <file.norm>");
                std::process::exit(EXIT_USAGE);
            };
            run_command(path)
        }
        "lex" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: norima lex <file.norm>");
                std::process::exit(EXIT_USAGE);
            };
            lex_file(path)
        }
        "parse" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: norima parse <file.norm>");
                std::process::exit(EXIT_USAGE);
            };
            parse_file(path)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        "version" | "--version" | "-V" => {
            println!("norima {}", env!("CARGO_PKG_VERSION"));
            0
        }
        path if path.ends_with(SOURCE_EXT) => run_command(path),
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            EXIT_USAGE
        }
    };

    std::process::exit(code);
}

fn print_usage() {
    eprintln!("Norima interpreter");
    eprintln!();
    eprintln!("Usage: norima <command> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run <file.norm>     Run a Norima program");
    eprintln!("  <file.norm>         Same as `run <file.norm>`");
    eprintln!("  lex <file.norm>     Print the token stream");
    eprintln!("  parse <file.norm>   Print the syntax tree");
    eprintln!("  help                Show this message");
    eprintln!("  version             Show version information");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  NORIMA_SCOPING      `dynamic` (default) or `lexical`");
    eprintln!("  NORIMA_MAX_DEPTH    maximum call depth (default 1000, or `unlimited`)");
    eprintln!("  RUST_LOG            enable logging, e.g. RUST_LOG=norima_eval=debug");
}
