use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Number},
};

/// One element of a flat expression sequence.
///
/// A sequence interleaves operation names with numeric operands, for example
/// `ADD, 2, 3, 4, DIV, 2`. Whether a name is an operation is decided by the
/// calculator at evaluation time, so any string is accepted here.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric operand.
    Number(Number),
    /// A name, normally a registered operation.
    Name(String),
}

impl Token {
    /// Returns the operand, or an error if this token is a name.
    ///
    /// # Example
    /// ```
    /// use calcstream::{Number, Token};
    ///
    /// assert_eq!(Token::from(4).as_number().unwrap(), Number::Integer(4));
    /// assert!(Token::from("ADD").as_number().is_err());
    /// ```
    pub fn as_number(&self) -> EvalResult<Number> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Name(name) => Err(RuntimeError::ExpectedNumber { token: name.clone() }),
        }
    }

    /// Returns the name carried by this token, if any.
    #[must_use]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name.as_str()),
            Self::Number(_) => None,
        }
    }
}

impl From<Number> for Token {
    fn from(n: Number) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Token {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for Token {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Name(name) => write!(f, "{name}"),
        }
    }
}

/// Builds a `Vec<Token>` from a mix of numbers and names.
///
/// # Example
/// ```
/// use calcstream::{ADD, Calculator, Number, tokens};
///
/// let calc = Calculator::new();
/// let result = calc.execute_expression(&tokens![ADD, 1, 2.5]).unwrap();
///
/// assert_eq!(result, Number::Real(3.5));
/// ```
#[macro_export]
macro_rules! tokens {
    ($($token:expr),* $(,)?) => {
        vec![$($crate::Token::from($token)),*]
    };
}
