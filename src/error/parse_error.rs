use thiserror::Error;

/// Line carried by errors raised where the token stream ran out.
///
/// The parsing helpers cannot see past the end of the stream, so they use this
/// placeholder and the program parser replaces it with the line of the last
/// token.
pub(crate) const END_OF_INPUT: usize = 0;

/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Found an unexpected token while parsing.
    #[error("Error on line {line}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Error on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error on line {line}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The function declaration syntax was invalid.
    #[error("Error on line {line}: Invalid function definition syntax. Example: कार्य जोड(अ, ब) {{ छाप(अ + ब) }}")]
    InvalidFunctionDefinition {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Used a keyword the language reserves but does not support yet.
    #[error("Error on line {line}: Keyword '{keyword}' is reserved and not supported.")]
    ReservedKeyword {
        /// The keyword lexeme.
        keyword: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A numeric literal could not be read.
    #[error("Error on line {line}: Invalid number literal '{lexeme}'.")]
    InvalidNumber {
        /// The literal text.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl ParseError {
    /// Stamps `end_line` onto errors raised where the token stream ran out.
    ///
    /// Errors that already know their line are returned unchanged.
    #[must_use]
    pub(crate) fn at_end_of_input(self, end_line: usize) -> Self {
        match self {
            Self::UnexpectedEndOfInput { line: END_OF_INPUT } => {
                Self::UnexpectedEndOfInput { line: end_line }
            },
            Self::ExpectedClosingParen { line: END_OF_INPUT } => {
                Self::ExpectedClosingParen { line: end_line }
            },
            other => other,
        }
    }
}
