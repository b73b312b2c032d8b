use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Lexeme, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting of parentheses, unary minus and operation calls accepted
/// by the parser.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parses a complete token list into a single expression.
///
/// The whole input must be consumed: anything left after the expression is
/// reported as trailing tokens.
///
/// # Errors
/// - `UnexpectedEndOfInput` for an empty or truncated input.
/// - `UnexpectedTrailingTokens` if tokens remain after the expression.
/// - `NestingTooDeep` if the input nests deeper than [`MAX_NESTING_DEPTH`].
/// - Any error raised by the grammar rules.
///
/// # Example
/// ```
/// use calcstream::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::tokenize, parser::core::parse},
/// };
///
/// let tokens = tokenize("1 + 2 * 3").unwrap();
/// let expr = parse(&tokens).unwrap();
///
/// assert!(matches!(expr, Expr::BinaryOp { op: BinaryOperator::Add, .. }));
/// ```
pub fn parse(tokens: &[(Lexeme, usize)]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, 0)?;

    if let Some((token, position)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:    token.to_string(),
                                                          position: *position, });
    }

    Ok(expr)
}

/// Parses a full expression.
///
/// This is the entry point for every nested expression. It begins at the
/// lowest-precedence level, addition, and recursively descends through the
/// precedence hierarchy. `depth` is the current nesting level, `0` at the
/// top of the input.
///
/// Grammar: `expression := additive`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Lexeme, usize)> + Clone
{
    parse_additive(tokens, depth)
}

/// Enters one more nesting level for the construct opened at `position`.
///
/// # Errors
/// `NestingTooDeep` once `depth` has reached [`MAX_NESTING_DEPTH`].
pub(in crate::interpreter::parser) const fn descend(depth: usize,
                                                    position: usize)
                                                    -> ParseResult<usize> {
    if depth >= MAX_NESTING_DEPTH {
        Err(ParseError::NestingTooDeep { position })
    } else {
        Ok(depth + 1)
    }
}
