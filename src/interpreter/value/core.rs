use std::rc::Rc;

use crate::{
    ast::FunctionDecl,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::numeral::{native_number_text, number_to_devanagari, text_to_number},
};

/// Represents a runtime value in the interpreter.
///
/// There is no boolean, list or object type.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A double precision floating-point number.
    Number(f64),
    /// A text string, already stripped of its quotes.
    Text(String),
    /// The absent value: an uninitialized variable or the result of a call.
    Null,
    /// A declared function. This is the declaration node itself, shared.
    Function(Rc<FunctionDecl>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl Value {
    /// Converts the value to a number for arithmetic.
    ///
    /// Numbers pass through. Text is read as a numeral in either digit
    /// alphabet (see [`text_to_number`]). Null and functions never convert.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: The numeric value.
    /// - `Err(RuntimeError::ConversionError)`: If the value is not numeric.
    ///
    /// # Example
    /// ```
    /// use lipi::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from("१२").to_number(1).unwrap(), 12.0);
    /// assert_eq!(Value::from("12").to_number(1).unwrap(), 12.0);
    /// assert!(Value::from("१२ab").to_number(1).is_err());
    /// assert!(Value::Null.to_number(1).is_err());
    /// ```
    pub fn to_number(&self, line: usize) -> EvalResult<f64> {
        let number = match self {
            Self::Number(n) => Some(*n),
            Self::Text(text) => text_to_number(text),
            Self::Null | Self::Function(_) => None,
        };

        number.ok_or_else(|| RuntimeError::ConversionError { value: self.to_string(),
                                                             line })
    }

    /// Renders the value the way a print statement shows it.
    ///
    /// With `devanagari_digits` set, numbers are written with Devanagari
    /// digits; every other value uses its `Display` form.
    ///
    /// # Example
    /// ```
    /// use lipi::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Number(20.0).render(true), "२०");
    /// assert_eq!(Value::Number(20.0).render(false), "20");
    /// assert_eq!(Value::from("नमस्ते").render(true), "नमस्ते");
    /// ```
    #[must_use]
    pub fn render(&self, devanagari_digits: bool) -> String {
        match self {
            Self::Number(n) if devanagari_digits => number_to_devanagari(*n),
            _ => self.to_string(),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", native_number_text(*n)),
            Self::Text(s) => write!(f, "{s}"),
            Self::Null => write!(f, "null"),
            Self::Function(decl) => write!(f, "<कार्य {}>", decl.name.lexeme),
        }
    }
}
