/// Devanagari numeral conversion.
///
/// Maps between the ten Devanagari digits (`०` through `९`, U+0966 to U+096F)
/// and native numbers. Used by the evaluator to read numeral literals, to
/// coerce operands before arithmetic, and to render printed numbers.
pub mod numeral;
