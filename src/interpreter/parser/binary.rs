use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Lexeme,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Lexeme, usize)> + Clone
{
    parse_left_assoc(tokens,
                     depth,
                     &[BinaryOperator::Add, BinaryOperator::Sub],
                     parse_multiplicative)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`, so `8 / 4 / 2` parses as
/// `(8 / 4) / 2`.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Lexeme, usize)> + Clone
{
    parse_left_assoc(tokens, depth, &[BinaryOperator::Mul, BinaryOperator::Div], parse_unary)
}

/// Folds `operand (op operand)*` into a left-leaning `BinaryOp` tree, for any
/// operator in `accepted`.
fn parse_left_assoc<'a, I>(tokens: &mut Peekable<I>,
                           depth: usize,
                           accepted: &[BinaryOperator],
                           operand: fn(&mut Peekable<I>, usize) -> ParseResult<Expr>)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Lexeme, usize)> + Clone
{
    let mut left = operand(tokens, depth)?;
    while let Some((token, position)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && accepted.contains(&op)
    {
        let position = *position;
        tokens.next();
        let right = operand(tokens, depth)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                position };
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for every token that is not `+`, `-`, `*` or `/`.
///
/// # Example
/// ```
/// use calcstream::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Lexeme, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Lexeme::Slash), Some(BinaryOperator::Div));
/// assert_eq!(token_to_binary_operator(&Lexeme::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Lexeme) -> Option<BinaryOperator> {
    match token {
        Lexeme::Plus => Some(BinaryOperator::Add),
        Lexeme::Minus => Some(BinaryOperator::Sub),
        Lexeme::Star => Some(BinaryOperator::Mul),
        Lexeme::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
