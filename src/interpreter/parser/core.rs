use std::iter::Peekable;

use crate::{
    ast::{Expr, Stmt},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_additive, statement::parse_statement, utils::skip_separators},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole token stream into a list of statements.
///
/// Statements are separated by line breaks or semicolons; blank lines are
/// allowed anywhere between them. A program that stops in the middle of a
/// statement is reported on the line of its last token.
///
/// Grammar: `program := (separator* statement)* separator*`
///
/// # Example
/// ```
/// use lipi::{
///     ast::Stmt,
///     interpreter::{lexer::tokenize, parser::core::parse_program},
/// };
///
/// let tokens = tokenize("मानौ क = १०\nछाप(क)").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.len(), 2);
/// assert!(matches!(program[0], Stmt::Var { .. }));
/// assert!(matches!(program[1], Stmt::Print(_)));
/// ```
pub fn parse_program(tokens: &[Token]) -> ParseResult<Vec<Stmt>> {
    let end_line = tokens.last().map_or(1, |t| t.line);
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    loop {
        skip_separators(&mut iter);
        if iter.peek().is_none() {
            break;
        }
        statements.push(parse_statement(&mut iter).map_err(|e| e.at_end_of_input(end_line))?);
    }

    Ok(statements)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the lowest
/// precedence level, addition, and descends through the hierarchy.
///
/// Grammar: `expression := additive`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_additive(tokens)
}
