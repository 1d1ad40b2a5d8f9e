//! End-to-end tests for the host boundary.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::io::Write;

use norima_eval::{buffer_handler, EvalConfig, Scoping};
use norimac::{run_file_with, run_source, RunError, RunOptions, EXIT_FAILURE, EXIT_SUCCESS};
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

fn buffered(config: EvalConfig) -> RunOptions {
    RunOptions {
        config,
        print_handler: buffer_handler(),
    }
}

/// Write `source` to a temporary `.norm` file and run it.
fn run_temp(source: &str, options: &RunOptions) -> i32 {
    let mut file = tempfile::Builder::new().suffix(".norm").tempfile().unwrap();
    file.write_all(source.as_bytes()).unwrap();
    file.flush().unwrap();
    run_file_with(file.path(), options)
}

/// Run `source` through a file and return `(exit code, output)`.
fn run(source: &str) -> (i32, String) {
    let options = buffered(EvalConfig::default());
    let code = run_temp(source, &options);
    (code, options.print_handler.get_output())
}

#[test]
fn let_binding_prints_literal() {
    for (literal, expected) in [("42", "42"), ("0.5", "0.5"), ("\"norima\"", "norima")] {
        let (code, output) = run(&format!("let v = {literal};\nprint(v);\n"));
        assert_eq!(code, EXIT_SUCCESS);
        assert_eq!(output, format!("{expected}\n"));
    }
}

#[test]
fn arithmetic_precedence() {
    assert_eq!(run("print(1 + 2 * 3);"), (EXIT_SUCCESS, "7\n".to_string()));
    assert_eq!(run("print((1 + 2) * 3);"), (EXIT_SUCCESS, "9\n".to_string()));
}

#[test]
fn function_return_propagates() {
    let source = "fn add(a, b) {\n  return a + b;\n}\nprint(add(2, 3));\n";
    assert_eq!(run(source), (EXIT_SUCCESS, "5\n".to_string()));
}

#[test]
fn redefinition_overwrites() {
    assert_eq!(
        run("let x = 1;\nlet x = 2;\nprint(x);"),
        (EXIT_SUCCESS, "2\n".to_string())
    );
}

#[test]
fn undefined_name_is_runtime_error() {
    let (code, output) = run("print(y);");
    assert_eq!(code, EXIT_FAILURE);
    assert_eq!(output, "Runtime error: undefined variable: y\n");
}

#[test]
fn dynamic_scope_resolves_against_caller() {
    let source = "\
fn greet() { return name; }
fn caller() {
  let name = \"caller\";
  return greet();
}
print(caller());
";
    assert_eq!(run(source), (EXIT_SUCCESS, "caller\n".to_string()));

    let options = buffered(EvalConfig {
        scoping: Scoping::Lexical,
        ..EvalConfig::default()
    });
    assert_eq!(run_temp(source, &options), EXIT_FAILURE);
    assert_eq!(
        options.print_handler.get_output(),
        "Runtime error: undefined variable: name\n"
    );
}

#[test]
fn arity_mismatch_is_not_an_error() {
    assert_eq!(
        run("fn f(a, b) { return a; }\nprint(f(1));"),
        (EXIT_SUCCESS, "1\n".to_string())
    );
    let (code, output) = run("fn f(a, b) { return b; }\nprint(f(1));");
    assert_eq!(code, EXIT_FAILURE);
    assert_eq!(output, "Runtime error: undefined variable: b\n");
}

#[test]
fn reruns_are_independent() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"let n = 1;\nprint(n + 1);\n").unwrap();
    file.flush().unwrap();

    let options = buffered(EvalConfig::default());
    assert_eq!(run_file_with(file.path(), &options), EXIT_SUCCESS);
    assert_eq!(run_file_with(file.path(), &options), EXIT_SUCCESS);
    assert_eq!(options.print_handler.get_output(), "2\n2\n");
}

#[test]
fn top_level_return_fails() {
    let (code, output) = run("print(1);\nreturn 2;");
    assert_eq!(code, EXIT_FAILURE);
    assert_eq!(output, "1\nRuntime error: `return` outside of a function\n");
}

#[test]
fn recursion_limit_fails_cleanly() {
    let options = buffered(EvalConfig {
        max_call_depth: Some(100),
        ..EvalConfig::default()
    });
    assert_eq!(run_temp("fn f() { return f(); }\nf();", &options), EXIT_FAILURE);
    assert_eq!(
        options.print_handler.get_output(),
        "Runtime error: maximum recursion depth of 100 exceeded\n"
    );
}

#[test]
fn syntax_errors_exit_one_without_output() {
    assert_eq!(run("let x = 1"), (EXIT_FAILURE, String::new()));
    assert_eq!(run("let x = 1 @ 2;"), (EXIT_FAILURE, String::new()));
}

#[test]
fn missing_file_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let options = buffered(EvalConfig::default());
    let code = run_file_with(dir.path().join("absent.norm"), &options);
    assert_eq!(code, EXIT_FAILURE);
    assert_eq!(options.print_handler.get_output(), "");
}

#[test]
fn run_source_reports_stage() {
    let options = buffered(EvalConfig::default());
    assert!(matches!(
        run_source("print(\"open);", &options),
        Err(RunError::Lex(_))
    ));
    assert!(matches!(
        run_source("fn f( {}", &options),
        Err(RunError::Parse(_))
    ));
    assert!(matches!(
        run_source("print(1 + \"a\");", &options),
        Err(RunError::Runtime(_))
    ));
    assert!(run_source("print(\"ok\");", &options).is_ok());
    assert_eq!(options.print_handler.get_output(), "ok\n");
}

#[test]
fn io_error_message_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gone.norm");
    let err = RunError::Io {
        path: path.display().to_string(),
        source: std::fs::read_to_string(&path).unwrap_err(),
    };
    assert!(err
        .to_string()
        .starts_with(&format!("cannot read '{}': ", path.display())));
}
