//! # quill
//!
//! quill is a small, dynamically typed, expression-oriented scripting
//! language. It supports integers, strings, booleans, first-class functions
//! with lexical closures, arrays, hashes, conditionals, while loops,
//! compound assignment, and a handful of built-in functions.
//!
//! The crate is the whole pipeline: a lexer, a Pratt parser with parse-time
//! constant folding, and a tree-walking evaluator, plus an interactive
//! shell. Source goes in one end, a runtime value comes out the other:
//!
//! ```
//! use quill::interpreter::{
//!     evaluator::core::eval_program,
//!     parser::core::parse,
//!     value::{core::Value, environment::Environment},
//! };
//!
//! let (program, errors) = parse("let double = fn(x) { x * 2 }; double(21)");
//! assert!(errors.is_empty());
//!
//! let env = Environment::new();
//! assert_eq!(eval_program(&program, &env), Ok(Value::Integer(42)));
//! ```

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
    evaluator::core::eval_program,
    parser::core::parse,
    value::{core::Value, environment::Environment},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement`, and `Expr` types that
/// represent source code as a tree, together with the operator enums. The
/// AST is built by the parser and walked by the evaluator; every node can
/// render itself back to surface syntax.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// Parse errors carry line context and accumulate in the parser; runtime
/// errors are the language's user-facing failure values and render exactly
/// the messages programs see.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together the lexer, parser, evaluator, value types, and
/// the interactive shell. It exposes the public API for interpreting and
/// executing programs.
pub mod interpreter;

/// Parses and evaluates a complete script in a fresh environment.
///
/// This is the one-shot entry point used by the command-line binary and the
/// test suites. Parse errors are joined into a single error; runtime errors
/// pass through as-is. With `auto_print` set, the script's final value is
/// printed unless it is `null` or void.
///
/// # Errors
/// Returns an error if the source fails to parse or evaluation raises a
/// runtime error.
///
/// # Examples
/// ```
/// use quill::get_result;
///
/// // The final value is computed without error.
/// let source = "let result = 2 + 2; result;";
/// assert!(get_result(source, false).is_ok());
///
/// // 'x' is not defined, so evaluation fails.
/// let source = "let y = x + 1;";
/// assert!(get_result(source, false).is_err());
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (program, errors) = parse(source);
    if !errors.is_empty() {
        return Err(errors.join("\n").into());
    }

    let env = Environment::new();
    let result = eval_program(&program, &env)?;

    if auto_print && !matches!(result, Value::Void | Value::Null) {
        println!("{result}");
    }

    Ok(())
}
