#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while executing operations.
pub enum RuntimeError {
    /// Called an operation name that has no registered reducer.
    FunctionNotFound {
        /// The name of the operation.
        name: String,
    },
    /// Attempted to register an operation that already exists while the
    /// calculator rejects duplicates.
    FunctionAlreadyDefined {
        /// The name of the operation.
        name: String,
    },
    /// An operation was applied to zero operands.
    EmptyArguments {
        /// The name of the operation.
        name: String,
    },
    /// A numeric operand was expected, but a name was found.
    ExpectedNumber {
        /// The offending token.
        token: String,
    },
    /// Integer arithmetic overflowed.
    Overflow,
    /// A token sequence contained no operation name to apply.
    MissingOperation,
    /// A token stream could not be evaluated.
    ///
    /// The failure that triggered it is kept as the error source.
    WrongExpression {
        /// The underlying failure.
        cause: Box<Self>,
    },
}

impl RuntimeError {
    /// Wraps any failure of the token-stream evaluator.
    #[must_use]
    pub fn wrong_expression(cause: Self) -> Self {
        Self::WrongExpression { cause: Box::new(cause) }
    }

    /// Returns `true` if this is a [`RuntimeError::WrongExpression`].
    #[must_use]
    pub const fn is_wrong_expression(&self) -> bool {
        matches!(self, Self::WrongExpression { .. })
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FunctionNotFound { name } => write!(f, "Function not found: '{name}'."),
            Self::FunctionAlreadyDefined { name } => {
                write!(f, "Function '{name}' is already defined.")
            },
            Self::EmptyArguments { name } => {
                write!(f, "Function '{name}' needs at least one argument.")
            },
            Self::ExpectedNumber { token } => write!(f, "Expected number, found '{token}'."),
            Self::Overflow => write!(f, "Integer overflow while trying to compute result."),
            Self::MissingOperation => write!(f, "Expression contains no operation."),
            Self::WrongExpression { .. } => write!(f, "Your expression is wrong."),
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::WrongExpression { cause } => Some(cause.as_ref()),
            _ => None,
        }
    }
}
