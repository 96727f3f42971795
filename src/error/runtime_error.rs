use thiserror::Error;

/// Represents all errors that can occur during evaluation.
///
/// Every kind aborts the run; nothing is retried or recovered.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Tried to read a variable that was never declared.
    #[error("Error on line {line}: Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a name that is not bound at all.
    #[error("Error on line {line}: Undefined function '{name}'.")]
    UndefinedFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a name that is bound to something other than a function.
    #[error("Error on line {line}: '{name}' is not a function.")]
    NotAFunction {
        /// The name that was called.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Error on line {line}: '{name}' expects {expected} arguments but got {found}.")]
    ArityMismatch {
        /// The name of the function.
        name:     String,
        /// Number of declared parameters.
        expected: usize,
        /// Number of supplied arguments.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Attempted division by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted modulo by zero.
    #[error("Error on line {line}: Modulo by zero.")]
    ModuloByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A binary expression used an operator with no arithmetic meaning.
    #[error("Error on line {line}: Unknown operator '{operator}'.")]
    UnknownOperator {
        /// The operator lexeme.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A value could not be converted to a number.
    #[error("Error on line {line}: Cannot convert '{value}' to number.")]
    ConversionError {
        /// The value, as it would be printed.
        value: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Writing to the output sink failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
