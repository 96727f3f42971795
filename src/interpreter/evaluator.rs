/// Core evaluation logic and interpreter state.
///
/// Contains the `Interpreter` itself, its result type, and the entry point
/// that runs a whole program.
pub mod core;

/// Variable storage.
///
/// The flat name-to-value map the interpreter reads and writes. A copy of it
/// is installed for the duration of each function call.
pub mod environment;

/// Statement execution.
///
/// Runs print statements, declarations, blocks and expression statements.
pub mod statement;

/// Expression evaluation.
///
/// Dispatches on expression variants and evaluates literals and variable
/// references.
pub mod expression;

/// Binary operator evaluation.
///
/// Numeric coercion of operands and the arithmetic operators.
pub mod binary;

/// Function calls.
///
/// Resolves the callee, checks arity, and runs the body on a copy of the
/// environment.
pub mod call;
