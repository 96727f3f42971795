/// Core parsing entry points.
///
/// Holds the parse result type, the program-level loop, and the expression
/// entry point.
pub mod core;

/// Statement parsing.
///
/// Declarations, print statements, blocks and expression statements.
pub mod statement;

/// Binary operator parsing.
///
/// Additive and multiplicative levels, both left-associative.
pub mod binary;

/// Primary expression parsing.
///
/// Literals, variable references, calls and parenthesized groups.
pub mod primary;

/// Shared parser helpers.
///
/// Token expectations, separator skipping and comma separated lists.
pub mod utils;
