use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Lexeme,
        parser::{
            core::{ParseResult, descend, parse_expression},
            utils::{expect_closing_paren, parse_comma_separated},
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operator `-` (numeric negation). Negation is
/// right-associative and binds tighter than every binary operator, so `--2`
/// is `-(-2)` and `-2 * 3` is `(-2) * 3`. Each `-` counts as one nesting
/// level.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Lexeme, usize)> + Clone
{
    if let Some((Lexeme::Minus, position)) = tokens.peek() {
        let position = *position;
        tokens.next();
        let expr = parse_unary(tokens, descend(depth, position)?)?;
        Ok(Expr::Negate { expr: Box::new(expr),
                          position })
    } else {
        parse_primary(tokens, depth)
    }
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := integer
///              | real
///              | identifier "(" arguments ")"
///              | "(" expression ")"
/// ```
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Lexeme, usize)> + Clone
{
    let (token, position) = tokens.next().ok_or(ParseError::UnexpectedEndOfInput)?;
    let position = *position;

    match token {
        Lexeme::Integer(n) => Ok(Expr::Literal { value: (*n).into(),
                                                 position }),
        Lexeme::Real(r) => Ok(Expr::Literal { value: (*r).into(),
                                              position }),
        Lexeme::LParen => parse_grouping(tokens, position, depth),
        Lexeme::Identifier(name) => parse_function_call(tokens, name, position, depth),
        tok => Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                 position }),
    }
}

/// Parses the inside of a parenthesized expression. The `(` has already been
/// consumed.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                        open: usize,
                        depth: usize)
                        -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Lexeme, usize)> + Clone
{
    let expr = parse_expression(tokens, descend(depth, open)?)?;
    expect_closing_paren(tokens, open)?;
    Ok(expr)
}

/// Parses an operation call such as `ADD(1, 2, 3)`. The name has already
/// been consumed; a bare identifier without `(` is an error, since there are
/// no variables.
fn parse_function_call<'a, I>(tokens: &mut Peekable<I>,
                              name: &str,
                              position: usize,
                              depth: usize)
                              -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Lexeme, usize)> + Clone
{
    match tokens.next() {
        Some((Lexeme::LParen, open)) => {
            let depth = descend(depth, *open)?;
            let arguments =
                parse_comma_separated(tokens, |tokens| parse_expression(tokens, depth), *open)?;
            Ok(Expr::FunctionCall { name: name.to_string(),
                                    arguments,
                                    position })
        },
        _ => Err(ParseError::UnexpectedToken { token: name.to_string(),
                                               position }),
    }
}
