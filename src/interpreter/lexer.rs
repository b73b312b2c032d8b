use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token of an infix expression.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Lexeme {
    /// Numeric literal tokens, such as `3.14`, `.5`, `2.0` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_float)]
    Real(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Identifier tokens; operation names such as `ADD` or `sqsum`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// Whitespace.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Lexeme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(r) => write!(f, "{r}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
            Self::Ignored => Ok(()),
        }
    }
}

/// Splits `source` into lexemes paired with their byte offsets.
///
/// # Errors
/// - `LiteralTooLarge` for an integer literal that does not fit in `i64`.
///   Minus signs are separate lexemes, so this includes the digits of
///   `-9223372036854775808`.
/// - `UnexpectedToken` for any other unrecognized input.
///
/// # Example
/// ```
/// use calcstream::interpreter::lexer::{Lexeme, tokenize};
///
/// let tokens = tokenize("2 * (x)").unwrap();
/// assert_eq!(tokens[0], (Lexeme::Integer(2), 0));
/// assert_eq!(tokens[1], (Lexeme::Star, 2));
/// assert_eq!(tokens.len(), 5);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Lexeme, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        if let Ok(tok) = token {
            tokens.push((tok, position));
        } else {
            let slice = lexer.slice();
            if slice.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseError::LiteralTooLarge { position });
            }
            return Err(ParseError::UnexpectedToken { token: slice.to_string(),
                                                     position });
        }
    }

    Ok(tokens)
}

/// Parses a floating-point literal from the current token slice.
fn parse_float(lex: &logos::Lexer<Lexeme>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
///
/// Returns `None` when the literal overflows `i64`.
fn parse_integer(lex: &logos::Lexer<Lexeme>) -> Option<i64> {
    lex.slice().parse().ok()
}
