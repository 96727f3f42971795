use std::io::Write;

use crate::{
    ast::{Expr, LiteralValue},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        lexer::Token,
        value::core::Value,
    },
    util::numeral::{devanagari_to_number, is_devanagari_numeral},
};

impl<W: Write> Interpreter<W> {
    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the entry point for expression evaluation; it dispatches on
    /// the expression variant.
    ///
    /// # Example
    /// ```
    /// use lipi::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let mut interpreter = Interpreter::new(Vec::new());
    ///
    /// assert_eq!(interpreter.evaluate(&Expr::literal("४२")).unwrap(), Value::Number(42.0));
    /// assert_eq!(interpreter.evaluate(&Expr::literal("\"नमस्ते\"")).unwrap(),
    ///            Value::from("नमस्ते"));
    /// ```
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal(value) => Ok(Self::eval_literal(value)),
            Expr::Variable(name) => self.eval_variable(name),
            Expr::Call { callee, args } => self.eval_call(callee, args),
            Expr::Binary { left,
                           operator,
                           right, } => self.eval_binary(left, operator, right),
        }
    }

    /// Interprets a raw literal.
    ///
    /// Text opening with `"` loses its first and last character. Text made
    /// only of Devanagari digits becomes a number. Anything else is returned
    /// as it is. Nothing is cached, so the same literal always yields the
    /// same value.
    pub(crate) fn eval_literal(value: &LiteralValue) -> Value {
        match value {
            LiteralValue::Text(text) if text.starts_with('"') => {
                Value::Text(strip_delimiters(text).to_string())
            },
            LiteralValue::Text(text) if is_devanagari_numeral(text) => {
                Value::Number(devanagari_to_number(text))
            },
            LiteralValue::Text(text) => Value::Text(text.clone()),
            LiteralValue::Number(n) => Value::Number(*n),
        }
    }

    /// Looks up a variable in the current environment.
    fn eval_variable(&self, name: &Token) -> EvalResult<Value> {
        self.environment
            .get(&name.lexeme)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.lexeme.clone(),
                                                             line: name.line, })
    }
}

/// Drops the first and the last character of `text`.
///
/// A lone `"` yields empty text.
fn strip_delimiters(text: &str) -> &str {
    let mut chars = text.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}
