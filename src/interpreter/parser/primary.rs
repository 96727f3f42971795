use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue},
    error::{ParseError, parse_error::END_OF_INPUT},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_comma_separated, skip_newlines},
        },
    },
    util::numeral::is_devanagari_numeral,
};

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | STRING
///              | IDENT
///              | IDENT "(" arguments? ")"
///              | "(" expression ")"
/// ```
///
/// Devanagari numerals and strings stay raw text in the literal; only ASCII
/// numerals are converted here.
///
/// # Errors
/// - `ReservedKeyword` for keywords without evaluator support.
/// - `UnexpectedToken` for anything that cannot start an expression.
/// - `UnexpectedEndOfInput` if the stream is exhausted.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let token = tokens.next()
                      .ok_or(ParseError::UnexpectedEndOfInput { line: END_OF_INPUT })?;

    match token.kind {
        TokenKind::Number => parse_number(token),
        TokenKind::String => Ok(Expr::Literal(LiteralValue::Text(token.lexeme.clone()))),
        TokenKind::Identifier => parse_identifier_or_call(tokens, token),
        TokenKind::OpenParen => parse_grouping(tokens, token.line),
        kind if kind.is_reserved() => {
            Err(ParseError::ReservedKeyword { keyword: token.lexeme.clone(),
                                              line:    token.line, })
        },
        _ => Err(ParseError::UnexpectedToken { token: token.lexeme.clone(),
                                               line:  token.line, }),
    }
}

/// Builds a literal from a number token.
fn parse_number(token: &Token) -> ParseResult<Expr> {
    if is_devanagari_numeral(&token.lexeme) {
        return Ok(Expr::Literal(LiteralValue::Text(token.lexeme.clone())));
    }

    token.lexeme
         .parse::<f64>()
         .map(|n| Expr::Literal(LiteralValue::Number(n)))
         .map_err(|_| ParseError::InvalidNumber { lexeme: token.lexeme.clone(),
                                                  line:   token.line, })
}

/// Parses a variable reference, or a call if `(` follows the name directly.
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>, name: &Token) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    if tokens.next_if(|t| t.kind == TokenKind::OpenParen).is_none() {
        return Ok(Expr::Variable(name.clone()));
    }

    let args = parse_comma_separated(tokens, parse_expression, TokenKind::CloseParen)?;

    Ok(Expr::Call { callee: name.clone(),
                    args })
}

/// Parses `( expression )`; the opening parenthesis is already consumed.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    skip_newlines(tokens);
    let expr = parse_expression(tokens)?;
    skip_newlines(tokens);

    expect(tokens, TokenKind::CloseParen).map_err(|_| ParseError::ExpectedClosingParen { line })?;

    Ok(expr)
}
