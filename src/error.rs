use thiserror::Error;

/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code: unexpected tokens, unterminated input, malformed declarations and
/// reserved keywords.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// undefined names, arity mismatches, division by zero and failed numeric
/// conversions.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error a full run of a program can end with.
#[derive(Debug, Error)]
pub enum Error {
    /// The source did not lex or parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The program failed while running.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
