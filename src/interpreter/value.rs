/// Runtime value representation.
///
/// Defines the `Value` enum with its four variants (number, text, null and
/// function), numeric coercion used by arithmetic, and the text rendering used
/// by print statements.
pub mod core;
