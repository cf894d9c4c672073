use std::fs;

use quill::run;
use walkdir::WalkDir;

fn assert_success(src: &str) {
    if let Err(e) = run(src, false) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if run(src, false).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

#[test]
fn example_scripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| {
                                         e.path().extension().is_some_and(|ext| ext == "ql")
                                     })
    {
        let path = entry.path();
        let script =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = run(&script, false) {
            panic!("Example script {path:?} failed:\n{script}\nError: {e}");
        }
    }

    assert!(count > 0, "No example scripts found in tests/scripts");
}

#[test]
fn arithmetic_and_bindings() {
    assert_success("let x = 1 + 2; x;");
    assert_success("let x = (5 + 10 * 2 + 15 / 3) * 2 + -10; x;");

    let value = run("let x = 2 + 3; x;", false).unwrap();
    assert_eq!(value.to_string(), "5");
}

#[test]
fn conditionals_and_functions() {
    assert_success("let max = fn(a, b) { if (a > b) { a } else { b } }; max(3, 7);");

    let value = run("let max = fn(a, b) { if (a > b) { a } else { b } }; max(3, 7);",
                    false).unwrap();
    assert_eq!(value.to_string(), "7");
}

#[test]
fn strings_concatenate() {
    let value = run(r#"let greet = fn(name) { "Hello, " + name + "!" }; greet("quill");"#,
                    false).unwrap();
    assert_eq!(value.to_string(), "Hello, quill!");
}

#[test]
fn closures_capture_their_defining_scope() {
    let value = run("let counter = fn(start) { fn() { start + 1 } }; let next = counter(41); \
                     next();",
                    false).unwrap();
    assert_eq!(value.to_string(), "42");
}

#[test]
fn parse_errors_refuse_evaluation() {
    assert_failure("let x 5;");

    let error = run("let x 5;", false).unwrap_err();
    assert_eq!(error.to_string(), "expected next token to be ASSIGN, got INT instead");
}

#[test]
fn runtime_errors_surface_their_canonical_message() {
    let error = run("foobar", false).unwrap_err();
    assert_eq!(error.to_string(), "identifier not found: foobar");
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("let x = 1 / 0;");
}

#[test]
fn unknown_identifier_is_error() {
    assert_failure("let y = x + 1;");
}

#[test]
fn wrong_function_arity_is_error() {
    assert_failure("let f = fn(x, y) { x + y; }; f(3);");
}

#[test]
fn calling_a_non_function_is_error() {
    assert_failure("let x = 5; x(1);");
}
