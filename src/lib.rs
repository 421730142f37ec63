//! # raft
//!
//! raft is a small dynamically typed scripting language written in Rust.
//! It scans and parses source text into statements, reporting every syntax
//! error it can find, and runs them on a tree-walking evaluator with
//! block-scoped variables.

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

use std::io::Write;

use crate::{
    ast::Stmt,
    error::{Diagnostics, Error, Reporter},
    interpreter::{evaluator::core::Context, lexer::scan, parser::core::parse},
};

/// Defines the structure of parsed code.
///
/// This module declares the tokens produced by the lexer and the `Expr` and
/// `Stmt` trees built by the parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines the closed set of token kinds and the token record.
/// - Defines expression and statement types for all language constructs.
/// - Renders trees in a compact prefix form for inspection.
pub mod ast;
/// Provides error types for scanning, parsing and evaluation.
///
/// Scanning and parsing do not stop at the first problem; their errors are
/// handed to a `Reporter`. Runtime errors abort execution and are returned.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and messages for context.
/// - Defines the diagnostics sink the front end reports through.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and the value model.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;

/// Scans and parses `source` into statements.
///
/// Every scan and parse error is sent to `reporter`; statements that failed
/// to parse are left out of the result. When `reporter` received anything the
/// program should not be run.
///
/// # Examples
/// ```
/// use raft::{error::Diagnostics, parse_source};
///
/// let mut diagnostics = Diagnostics::default();
/// let statements = parse_source("var a = 1; print a +;", &mut diagnostics);
///
/// assert_eq!(statements.len(), 1);
/// assert_eq!(diagnostics.to_string(), "[line 1] Error at ';': Expect expression.");
/// ```
pub fn parse_source(source: &str, reporter: &mut dyn Reporter) -> Vec<Stmt> {
    let tokens = scan(source, reporter);
    tracing::debug!(count = tokens.len(), "scanned");
    let statements = parse(&tokens, reporter);
    tracing::debug!(count = statements.len(), "parsed");
    statements
}

/// Runs a whole program, writing `print` output to `out`.
///
/// The source is parsed first. If anything was reported nothing is executed
/// and all diagnostics are returned together; otherwise the statements run in
/// a fresh context until they finish or the first runtime error.
///
/// # Errors
/// `Error::Syntax` with every scan and parse diagnostic, or
/// `Error::Runtime` with the error that stopped execution.
///
/// # Examples
/// ```
/// use raft::get_result;
///
/// let source = "var greeting = \"hi\"; print greeting + \"!\";";
/// assert!(get_result(source, Box::new(std::io::sink())).is_ok());
///
/// // Runtime error: 'x' was never declared.
/// let source = "print x + 1;";
/// assert!(get_result(source, Box::new(std::io::sink())).is_err());
/// ```
pub fn get_result(source: &str, out: Box<dyn Write>) -> Result<(), Error> {
    let mut diagnostics = Diagnostics::default();
    let statements = parse_source(source, &mut diagnostics);

    if !diagnostics.is_empty() {
        return Err(diagnostics.into());
    }

    let mut context = Context::with_output(out);
    context.execute(&statements)?;
    Ok(())
}
