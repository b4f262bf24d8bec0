//! # helang
//!
//! helang is an interpreter for the he programming language, in which every
//! value is a `u8`: a scalar number or a 1-based array of numbers. It
//! lexes, parses and evaluates he source with support for scalar and array
//! variables, bitwise-or literal lists, member indexing, assignment,
//! increment/decrement, and the `print`/`sprint` statements.

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

use crate::interpreter::{evaluator::core::Context, lexer::tokenize, parser::core::parse_program};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of he source as a tree. The AST
/// is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches token positions to AST nodes for error reporting.
/// - Derives the flattened index/value sequences of bitwise-or chains.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while interpreting he
/// code. It standardizes error reporting and carries detailed information
/// about failures, including token positions.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches token positions and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and the value
/// representation to provide a complete runtime for he source. It exposes
/// the pieces of the pipeline individually as well.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator and value.
/// - Provides entry points for tokenizing, parsing and evaluating code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert the interpreter's `i64` numbers to `usize` and `u32`
///   without silent data loss.
pub mod util;

/// Tokenizes, parses and evaluates a he script against a context.
///
/// The three pipeline phases run to completion one after the other; the
/// first error aborts the run. Errors do not roll back bindings made by
/// earlier statements, which is what a read-eval-print shell wants: it
/// keeps the context and moves on to the next line.
///
/// # Errors
/// Returns the first `LexError`, `ParseError`, or `RuntimeError` raised by
/// the phases.
///
/// # Examples
/// ```
/// use helang::{interpreter::evaluator::core::Context, run_script};
///
/// let mut context = Context::new();
/// run_script("u8 x = 1 | 2 | 3;", &mut context).unwrap();
/// assert!(context.is_declared("x"));
///
/// // 'y' was never declared, so this fails.
/// assert!(run_script("y = 5;", &mut context).is_err());
/// ```
pub fn run_script(source: &str, context: &mut Context) -> Result<(), Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();
    let program = parse_program(&mut iter)?;
    context.eval_program(&program)?;
    Ok(())
}
