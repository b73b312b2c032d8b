#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Positions are byte offsets into the source string.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset where the token starts.
        position: usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Byte offset of the matching opening parenthesis.
        position: usize,
    },
    /// Found extra tokens after parsing should have completed.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token:    String,
        /// Byte offset where the token starts.
        position: usize,
    },
    /// A literal value was too large to be represented safely.
    ///
    /// Integer literals are lexed before unary minus is applied, so
    /// `-9223372036854775808` (`i64::MIN`) is rejected here as well; write it
    /// as `-9223372036854775807 - 1` instead.
    LiteralTooLarge {
        /// Byte offset where the literal starts.
        position: usize,
    },
    /// Parentheses, unary minus or operation calls are nested more deeply
    /// than [`MAX_NESTING_DEPTH`](crate::interpreter::parser::core::MAX_NESTING_DEPTH).
    NestingTooDeep {
        /// Byte offset of the token that opened the offending level.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at offset {position}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput => write!(f, "Error: Unexpected end of input."),

            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Error at offset {position}: Expected closing parenthesis ')' but none found."),

            Self::UnexpectedTrailingTokens { token, position } => write!(f,
                                                                         "Error at offset {position}: Extra tokens after expression: {token}"),

            Self::LiteralTooLarge { position } => {
                write!(f, "Error at offset {position}: Literal is too large.")
            },

            Self::NestingTooDeep { position } => {
                write!(f, "Error at offset {position}: Expression is nested too deeply.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
