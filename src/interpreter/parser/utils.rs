use std::iter::Peekable;

use crate::{
    error::{ParseError, parse_error::END_OF_INPUT},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Skips line breaks and semicolons, which separate statements.
pub(in crate::interpreter::parser) fn skip_separators<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token>
{
    while tokens.next_if(|t| matches!(t.kind, TokenKind::NewLine | TokenKind::Semicolon))
                 .is_some()
    {}
}

/// Skips line breaks only. Used inside parenthesized lists.
pub(in crate::interpreter::parser) fn skip_newlines<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token>
{
    while tokens.next_if(|t| t.kind == TokenKind::NewLine).is_some() {}
}

/// Consumes the next token, which must be of kind `kind`.
///
/// # Errors
/// - `UnexpectedToken` if another token comes next.
/// - `UnexpectedEndOfInput` if the stream is exhausted.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: TokenKind)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token.kind == kind => Ok(token),
        Some(token) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected {kind:?}, found '{}'",
                                                             token.lexeme),
                                              line:  token.line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: END_OF_INPUT }),
    }
}

/// Parses a plain identifier and returns its token.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier or the input
/// ends.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<Token>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, TokenKind::Identifier).cloned()
}

/// Parses a comma-separated list of items until a closing token.
///
/// Shared by call arguments and function parameters. The opening token must
/// already be consumed. An immediately encountered closing token produces an
/// empty list. Line breaks between items are ignored.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the opening token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token kind that terminates the list.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: TokenKind)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token>
{
    let mut items = Vec::new();

    skip_newlines(tokens);
    if tokens.next_if(|t| t.kind == closing).is_some() {
        return Ok(items);
    }

    loop {
        skip_newlines(tokens);
        items.push(parse_item(tokens)?);
        skip_newlines(tokens);

        match tokens.next() {
            Some(token) if token.kind == TokenKind::Comma => {},
            Some(token) if token.kind == closing => break,
            Some(token) => {
                return Err(ParseError::UnexpectedToken { token: format!("Expected ',' or {closing:?}, found '{}'",
                                                                        token.lexeme),
                                                         line:  token.line, });
            },
            None if closing == TokenKind::CloseParen => {
                return Err(ParseError::ExpectedClosingParen { line: END_OF_INPUT });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line: END_OF_INPUT }),
        }
    }

    Ok(items)
}
