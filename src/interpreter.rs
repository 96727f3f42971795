/// The evaluator module executes AST nodes.
///
/// The evaluator walks the statement list, evaluates expressions, manages the
/// environment across function calls, and writes print output to its sink.
///
/// # Responsibilities
/// - Evaluates every expression and statement variant.
/// - Applies numeral coercion and arithmetic.
/// - Reports runtime errors such as undefined names or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces tokens for Devanagari
/// keywords, identifiers, numerals in both digit alphabets, strings and ASCII
/// punctuation.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Applies operator precedence: `*`, `/` and `%` bind tighter than `+` and
///   `-`; both levels associate to the left.
/// - Reports syntax errors with line information.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
pub mod value;
