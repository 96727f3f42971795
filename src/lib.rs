//! # lipi
//!
//! lipi is an interpreter for a small scripting language whose keywords and
//! numerals are written in Devanagari. Programs declare variables with
//! `मानौ`, define functions with `कार्य`, and print with `छाप`; arithmetic
//! works on Devanagari numerals (`५ + ३`) as well as ASCII ones.

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

use std::io::Write;

use crate::{
    ast::Stmt,
    config::Config,
    error::{Error, ParseError},
    interpreter::{evaluator::core::Interpreter, lexer::tokenize, parser::core::parse_program},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Stmt` enums that represent source code
/// as a tree. The AST is built by the parser and walked by the evaluator; it
/// is never modified after parsing.
pub mod ast;
/// Interpreter options.
///
/// Holds the settings that change how a program's output looks, such as
/// whether numbers print with Devanagari or ASCII digits.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and the offending name, operator or value.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations.
pub mod interpreter;
/// General utilities.
///
/// Holds the Devanagari numeral conversions shared by the parser, the
/// evaluator and value rendering.
pub mod util;

/// Lexes and parses source text into a program.
///
/// # Example
/// ```
/// use lipi::{ast::Stmt, parse_source};
///
/// let program = parse_source("कार्य जोड(अ, ब) {\n  छाप(अ + ब)\n}").unwrap();
///
/// let Stmt::Function(decl) = &program[0] else { panic!("expected a function") };
/// assert_eq!(decl.name.lexeme, "जोड");
/// assert_eq!(decl.params.len(), 2);
/// assert_eq!(decl.body.len(), 1);
/// ```
pub fn parse_source(source: &str) -> Result<Vec<Stmt>, ParseError> {
    let tokens = tokenize(source)?;
    parse_program(&tokens)
}

/// Parses and runs a program, writing its output to `sink`.
///
/// Parsing finishes before anything runs, so a syntax error produces no
/// output at all.
///
/// # Errors
/// Returns an error if parsing fails or if any runtime error occurs.
///
/// # Examples
/// ```
/// use lipi::{config::Config, run_source};
///
/// let mut output = Vec::new();
/// run_source("मानौ क = ५ + ३\nछाप(क)", Config::default(), &mut output).unwrap();
/// assert_eq!(String::from_utf8(output).unwrap(), "८\n");
///
/// // Example with an intentional error (unknown variable).
/// let res = run_source("छाप(ख)", Config::default(), Vec::new());
/// assert!(res.is_err());
/// ```
pub fn run_source<W: Write>(source: &str, config: Config, sink: W) -> Result<(), Error> {
    let program = parse_source(source)?;

    let mut interpreter = Interpreter::with_config(sink, config);
    interpreter.interpret(&program)?;

    Ok(())
}
