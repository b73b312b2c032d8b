/// Parsing errors.
///
/// Defines all error types that can occur while lexing and parsing an infix
/// expression string. Parse errors include unexpected tokens, unbalanced
/// parentheses and oversized literals, all detected before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while executing operations:
/// unknown or duplicate operation names, empty operand lists, non-numeric
/// operands, integer overflow and malformed token streams.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced by [`Calculator::execute_str`].
///
/// String expressions can fail while parsing or while evaluating, so this
/// enum carries either kind.
///
/// [`Calculator::execute_str`]: crate::interpreter::evaluator::core::Calculator::execute_str
#[derive(Debug)]
pub enum Error {
    /// The source could not be tokenized or parsed.
    Parse(ParseError),
    /// The parsed expression failed during evaluation.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
