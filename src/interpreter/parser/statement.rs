use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{FunctionDecl, Stmt},
    error::{ParseError, parse_error::END_OF_INPUT},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_comma_separated, parse_identifier, skip_separators},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a variable declaration (`मानौ`),
/// - a function declaration (`कार्य`),
/// - a print statement (`छाप`),
/// - a block in braces,
/// - an expression used as a statement.
///
/// Reserved keywords that have no meaning yet are rejected.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    let Some(&token) = tokens.peek() else {
        return Err(ParseError::UnexpectedEndOfInput { line: END_OF_INPUT });
    };

    match token.kind {
        TokenKind::Let => parse_var_declaration(tokens),
        TokenKind::Function => parse_function_declaration(tokens),
        TokenKind::Print => parse_print(tokens),
        TokenKind::OpenCurly => parse_block(tokens).map(Stmt::Block),
        kind if kind.is_reserved() => {
            Err(ParseError::ReservedKeyword { keyword: token.lexeme.clone(),
                                              line:    token.line, })
        },
        _ => parse_expression(tokens).map(Stmt::Expression),
    }
}

/// Parses `मानौ <identifier> (= <expression>)?`.
///
/// Without `=` the variable is declared with no initializer.
fn parse_var_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, TokenKind::Let)?;
    let name = parse_identifier(tokens)?;

    let initializer = if tokens.next_if(|t| t.kind == TokenKind::Equal).is_some() {
        Some(parse_expression(tokens)?)
    } else {
        None
    };

    Ok(Stmt::Var { name, initializer })
}

/// Parses `कार्य <identifier> ( <params> ) { <body> }`.
///
/// # Errors
/// `InvalidFunctionDefinition` when the name, parameter list or body is
/// malformed.
fn parse_function_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    let keyword = expect(tokens, TokenKind::Function)?;
    let invalid = |_| ParseError::InvalidFunctionDefinition { line: keyword.line };

    let name = parse_identifier(tokens).map_err(invalid)?;
    expect(tokens, TokenKind::OpenParen).map_err(invalid)?;
    let params = parse_comma_separated(tokens, parse_identifier, TokenKind::CloseParen)?;

    if tokens.peek().is_none_or(|t| t.kind != TokenKind::OpenCurly) {
        return Err(ParseError::InvalidFunctionDefinition { line: keyword.line });
    }
    let body = parse_block(tokens)?;

    Ok(Stmt::Function(Rc::new(FunctionDecl { name, params, body })))
}

/// Parses `छाप ( <expression> )`.
fn parse_print<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    let keyword = expect(tokens, TokenKind::Print)?;
    expect(tokens, TokenKind::OpenParen)?;
    let expr = parse_expression(tokens)?;
    expect(tokens, TokenKind::CloseParen).map_err(|_| {
                                             ParseError::ExpectedClosingParen { line: keyword.line }
                                         })?;

    Ok(Stmt::Print(expr))
}

/// Parses a brace-delimited statement list.
///
/// Statements inside may be separated by line breaks or semicolons.
///
/// Grammar: `block := "{" (separator* statement)* separator* "}"`
fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Stmt>>
    where I: Iterator<Item = &'a Token>
{
    let open = expect(tokens, TokenKind::OpenCurly)?;
    let mut statements = Vec::new();

    loop {
        skip_separators(tokens);
        match tokens.peek() {
            Some(token) if token.kind == TokenKind::CloseCurly => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens)?),
            None => return Err(ParseError::UnexpectedEndOfInput { line: open.line }),
        }
    }

    Ok(statements)
}
