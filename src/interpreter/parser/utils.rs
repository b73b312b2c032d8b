use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Lexeme, parser::core::ParseResult},
};

/// Parses a comma-separated list of items up to and including the closing
/// `)`.
///
/// An immediately encountered `)` produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)* ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or `)`.
/// - `parse_item`: Function used to parse each list element.
/// - `open`: Byte offset of the opening `(`, for error reporting.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing `)`.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    open: usize)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Lexeme, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((Lexeme::RParen, _)) = tokens.peek() {
        tokens.next();
        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((Lexeme::Comma, _)) => {},
            Some((Lexeme::RParen, _)) => return Ok(items),
            Some((tok, position)) => {
                return Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                         position: *position, });
            },
            None => return Err(ParseError::ExpectedClosingParen { position: open }),
        }
    }
}

/// Consumes a `)` closing the group opened at `open`.
///
/// # Errors
/// `ExpectedClosingParen` if the next token is anything else or the input
/// has ended.
pub(in crate::interpreter::parser) fn expect_closing_paren<'a, I>(tokens: &mut Peekable<I>,
                                                                  open: usize)
                                                                  -> ParseResult<()>
    where I: Iterator<Item = &'a (Lexeme, usize)> + Clone
{
    match tokens.next() {
        Some((Lexeme::RParen, _)) => Ok(()),
        _ => Err(ParseError::ExpectedClosingParen { position: open }),
    }
}
