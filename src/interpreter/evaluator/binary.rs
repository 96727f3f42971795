use std::io::Write;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        lexer::{Token, TokenKind},
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates a binary expression.
    ///
    /// Both sides are evaluated left to right and converted to numbers before
    /// the operator is looked at, so a non-numeric operand fails with
    /// `ConversionError` even when the operator would not need it.
    pub(crate) fn eval_binary(&mut self,
                              left: &Expr,
                              operator: &Token,
                              right: &Expr)
                              -> EvalResult<Value> {
        let left = self.evaluate(left)?;
        let right = self.evaluate(right)?;

        Self::apply_operator(operator, &left, &right)
    }

    /// Applies an arithmetic operator to two evaluated operands.
    ///
    /// - `+` concatenates when both operands are text and adds otherwise.
    /// - `-` and `*` are plain arithmetic.
    /// - `/` and `%` reject a zero divisor; `%` keeps the sign of the
    ///   dividend.
    ///
    /// Any other operator fails with `UnknownOperator`.
    ///
    /// # Example
    /// ```
    /// use lipi::interpreter::{
    ///     evaluator::core::Interpreter,
    ///     lexer::{Token, TokenKind},
    ///     value::core::Value,
    /// };
    ///
    /// let plus = Token::new(TokenKind::Plus, "+", 1);
    ///
    /// let sum = Interpreter::<Vec<u8>>::apply_operator(&plus, &Value::Number(5.0), &Value::from("३"));
    /// assert_eq!(sum.unwrap(), Value::Number(8.0));
    ///
    /// let joined = Interpreter::<Vec<u8>>::apply_operator(&plus, &Value::from("१"), &Value::from("२"));
    /// assert_eq!(joined.unwrap(), Value::from("१२"));
    /// ```
    pub fn apply_operator(operator: &Token, left: &Value, right: &Value) -> EvalResult<Value> {
        let line = operator.line;
        let l = left.to_number(line)?;
        let r = right.to_number(line)?;

        let result = match operator.kind {
            TokenKind::Plus => {
                if let (Value::Text(a), Value::Text(b)) = (left, right) {
                    return Ok(Value::Text(format!("{a}{b}")));
                }
                l + r
            },
            TokenKind::Minus => l - r,
            TokenKind::Star => l * r,
            TokenKind::Slash => {
                if r == 0.0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                l / r
            },
            TokenKind::Mod => {
                if r == 0.0 {
                    return Err(RuntimeError::ModuloByZero { line });
                }
                l % r
            },
            _ => {
                return Err(RuntimeError::UnknownOperator { operator: operator.lexeme.clone(),
                                                           line });
            },
        };

        Ok(Value::Number(result))
    }
}
