//! # anaconda
//!
//! anaconda is a small arithmetic expression interpreter written in Rust.
//! It scans, parses, and evaluates expressions built from integers, floats,
//! `+ - * /`, unary signs, and parentheses, reporting every failure with
//! its exact source position — and, for runtime failures, a traceback of
//! the call context it happened under.

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
    evaluator::core::Context,
    lexer::Lexer,
    parser::core::parse,
    value::Number,
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum that represents the syntactic
/// structure of an expression as a tree. The AST is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the closed set of expression node variants.
/// - Derives each node's source span from the tokens it was built from.
pub mod ast;
/// Provides unified error types for scanning, parsing and evaluation.
///
/// This module defines all errors that can be raised while interpreting an
/// expression. It standardizes error reporting and carries detailed
/// information about failures, including source locations and, for runtime
/// errors, the call-context traceback.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (lexer, parser, evaluator).
/// - Renders each error in its user-visible message format.
/// - Aggregates the stage errors into one [`error::Error`] for callers.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together scanning, parsing, evaluation, value
/// representation and position tracking to provide a complete pipeline for
/// evaluating a single expression.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and values.
/// - Manages the flow of data and errors between stages.
pub mod interpreter;

/// Display name of the root call-context frame.
const ROOT_CONTEXT_NAME: &str = "<ACSHELL>";

/// Evaluates one expression and returns the resulting number.
///
/// This is the pipeline's single entry point: the text is scanned into
/// tokens, parsed into a tree, and evaluated under a fresh root context.
/// Each stage short-circuits to an error on failure; no stage proceeds past
/// the first error, and repeated calls with the same input always produce
/// the same result.
///
/// # Parameters
/// - `source_name`: Name the input should be reported under in error
///   messages, e.g. `<stdin>` or a file path.
/// - `text`: The expression to evaluate.
///
/// # Errors
/// Returns an [`error::Error`] wrapping whichever stage failed first.
///
/// # Examples
/// ```
/// use anaconda::run;
///
/// let value = run("<stdin>", "2 + 3 * 4").unwrap();
/// assert_eq!(value.to_string(), "14");
///
/// let error = run("<stdin>", "1 / 0").unwrap_err();
/// assert!(error.to_string().contains("division by 0"));
/// ```
pub fn run(source_name: &str, text: &str) -> Result<Number, error::Error> {
    let tokens = Lexer::new(source_name, text).tokenize()?;
    let ast = parse(&tokens)?;

    let context = Context::new(ROOT_CONTEXT_NAME);
    Ok(context.eval(&ast)?)
}
