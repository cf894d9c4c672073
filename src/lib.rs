//! # quill
//!
//! quill is a small, dynamically-typed scripting language written in Rust.
//! It supports integers, booleans, strings, `let` bindings, conditionals,
//! and first-class functions with lexical closures, interpreted by walking
//! the syntax tree directly.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    environment::Environment,
    evaluator::core::eval,
    lexer::Lexer,
    parser::core::Parser,
    value::Value,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expression` and `Statement` enums and related
/// types that represent the syntactic structure of source code as a tree.
/// The AST is built by the parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Renders every node back to a canonical source form; the rendering is a
///   stable contract used by the test suite.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating code. Parse errors are collected by the parser; runtime errors
/// short-circuit evaluation. Both carry canonical, literally-tested
/// messages.
///
/// # Responsibilities
/// - Defines error enums for both failure channels.
/// - Renders each error to its canonical message.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and lexical environments to provide a complete runtime
/// for source code. It exposes the public API for interpreting programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Runs a quill program from source to final value.
///
/// Lexes and parses the source, refuses to evaluate when the parser
/// collected any errors (the first one is returned), then evaluates the
/// program against a fresh top-level environment. With `auto_print` set,
/// the final value is printed to standard output unless it is `null`.
///
/// # Errors
/// Returns the first parse error, or the runtime error that stopped
/// evaluation.
///
/// # Examples
/// ```
/// use quill::run;
///
/// // Simple program: the final value is the last expression.
/// let result = run("let x = 2 + 2; x;", false);
/// assert!(result.is_ok());
///
/// // Example with an intentional error (unknown identifier).
/// let result = run("let y = x + 1;", false); // 'x' is not defined
/// assert!(result.is_err());
/// ```
pub fn run(source: &str, auto_print: bool) -> Result<Value, Box<dyn std::error::Error>> {
    let lexer = Lexer::new(source);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    if let [first, ..] = parser.errors() {
        return Err(Box::new(first.clone()));
    }

    let env = Environment::new();
    let result = eval(&program, &env)?;

    if auto_print && !matches!(result, Value::Null) {
        println!("{result}");
    }

    Ok(result)
}
