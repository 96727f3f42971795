use std::iter::Peekable;

use crate::{
    ast::Expr,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, primary::parse_primary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_multiplicative(tokens)?;
    while let Some(operator) =
        tokens.next_if(|t| matches!(t.kind, TokenKind::Plus | TokenKind::Minus))
    {
        let right = parse_multiplicative(tokens)?;
        left = Expr::binary(left, operator.clone(), right);
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*`, `/` and `%`.
///
/// The rule is: `multiplicative := primary (("*" | "/" | "%") primary)*`
///
/// # Returns
/// A binary expression tree combining primary nodes.
///
/// # Example
/// ```
/// use lipi::{
///     ast::Expr,
///     interpreter::{lexer::tokenize, parser::binary::parse_multiplicative},
/// };
///
/// let tokens = tokenize("८ / ४ % ३").unwrap();
/// let expr = parse_multiplicative(&mut tokens.iter().peekable()).unwrap();
///
/// // `(८ / ४) % ३`
/// let Expr::Binary { left, operator, .. } = expr else { panic!("not binary") };
/// assert_eq!(operator.lexeme, "%");
/// assert!(matches!(*left, Expr::Binary { .. }));
/// ```
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_primary(tokens)?;
    while let Some(operator) = tokens.next_if(|t| {
                                          matches!(t.kind,
                                                   TokenKind::Star
                                                   | TokenKind::Slash
                                                   | TokenKind::Mod)
                                      })
    {
        let right = parse_primary(tokens)?;
        left = Expr::binary(left, operator.clone(), right);
    }
    Ok(left)
}
