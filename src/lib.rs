//! # southscript
//!
//! southscript is a tree-walking interpreter for SouthScript, a small
//! dynamically typed expression language. Everything is an expression:
//! conditionals, loops and function definitions all produce values. Errors
//! are reported with the source position and, for runtime errors, the call
//! stack at the point of failure.

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
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::Error,
    interpreter::{
        context::Context, environment::Environment, evaluator::core::Evaluator,
        lexer::tokenize, parser::core::parse, session::Interpreter, value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the expression variants for all language constructs.
/// - Attaches source spans to every node for error reporting.
pub mod ast;
/// Provides unified error types for tokenizing, parsing and evaluation.
///
/// Every error carries the span it is attributed to and renders in the
/// `Cattywampus!` format shown to users.
///
/// # Responsibilities
/// - Defines an error type per phase and the `Error` enum wrapping them.
/// - Reconstructs tracebacks from the execution context chain.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and the built-in library to provide a complete runtime.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides the persistent interpreter session.
pub mod interpreter;
/// General utilities for numeric conversion.
pub mod util;

/// Runs one program: tokenize, parse, evaluate.
///
/// The program is evaluated directly in `globals`, so its top-level
/// assignments stay bound there, and inside `context`, which becomes the
/// outermost frame of any traceback.
///
/// # Errors
/// Returns the first lexical, syntax or runtime error.
///
/// # Examples
/// ```
/// use southscript::{
///     execute,
///     interpreter::{context::Context, environment::Environment, value::core::Value},
/// };
///
/// let globals = Environment::new_root();
/// let result = execute("<stdin>", "THANG y = 6 * 7", &globals, &Context::root("<main>"));
///
/// assert_eq!(result.unwrap(), Some(Value::from(42.0)));
/// assert_eq!(globals.lookup("y"), Some(Value::from(42.0)));
/// ```
pub fn execute(source_name: &str,
               source: &str,
               globals: &Environment,
               context: &Context)
               -> Result<Option<Value>, Error> {
    let lexemes = tokenize(source_name, source)?;
    let program = parse(&lexemes)?;

    let evaluator = Evaluator::new(globals.clone());
    let result = evaluator.eval(&program, globals, context)?;

    debug!(source = source_name, has_value = result.is_some(), "program finished");
    Ok(result)
}

/// Runs a program in a fresh interpreter with every built-in installed.
///
/// # Errors
/// Returns an error if tokenizing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use southscript::{interpreter::value::core::Value, run};
///
/// let source = "[FIXIN' fact(n) -> RECKON n <= 1 THEN 1 ELSE n * fact(n - 1), fact(5)]";
/// let result = run(source).unwrap().unwrap();
/// assert_eq!(result.to_string(), "[<function fact>, 120]");
///
/// // Example with an intentional error (unknown variable).
/// assert!(run("x + 1").is_err());
/// ```
pub fn run(source: &str) -> Result<Option<Value>, Error> {
    Interpreter::new().run("<stdin>", source)
}
