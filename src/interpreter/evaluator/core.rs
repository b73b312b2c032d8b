use std::{collections::HashMap, sync::Arc};

use crate::{
    ast::Expr,
    error::{Error, RuntimeError},
    interpreter::{
        evaluator::function::{builtin::BUILTIN_TABLE, core::Operation},
        lexer::tokenize,
        parser::core::parse,
        value::core::Number,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// What happens when an operation is registered under a name that is already
/// taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistrationPolicy {
    /// The new reducer replaces the old one. Last registration wins.
    #[default]
    Overwrite,
    /// Registration fails with [`RuntimeError::FunctionAlreadyDefined`].
    Reject,
}

/// Stores the operation registry and evaluates expressions against it.
///
/// ## Usage
///
/// A `Calculator` is created once, optionally extended with custom
/// operations, and then reused. Registration needs `&mut self`; every
/// evaluation entry point only needs `&self`, so a fully configured
/// calculator can be shared freely.
///
/// ```
/// use calcstream::{Calculator, MUL, Number, tokens};
///
/// let mut calc = Calculator::new();
/// calc.register_custom_function("MAX", |args| {
///         args.iter()
///             .copied()
///             .reduce(|a, b| if b.as_real() > a.as_real() { b } else { a })
///             .ok_or(calcstream::RuntimeError::EmptyArguments { name: "MAX".into() })
///     })
///     .unwrap();
///
/// let result = calc.execute_expression(&tokens!["MAX", 3, 9, 4, MUL, 2]).unwrap();
/// assert_eq!(result, Number::Integer(18));
/// ```
pub struct Calculator {
    /// A mapping from operation names to their reducers. Seeded with the
    /// built-in `ADD`, `SUB`, `MUL` and `DIV`.
    pub(crate) operations: HashMap<String, Operation>,
    /// How duplicate registrations are handled.
    pub(crate) policy:     RegistrationPolicy,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Calculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calculator")
         .field("operations", &self.operation_names())
         .field("policy", &self.policy)
         .finish()
    }
}

impl Calculator {
    /// Creates a calculator holding the four built-in operations. Duplicate
    /// registrations overwrite.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(RegistrationPolicy::default())
    }

    /// Creates a calculator holding the four built-in operations, using the
    /// given policy for duplicate registrations.
    ///
    /// # Example
    /// ```
    /// use calcstream::{ADD, Calculator, RegistrationPolicy, RuntimeError};
    ///
    /// let mut calc = Calculator::with_policy(RegistrationPolicy::Reject);
    /// let err = calc.register_custom_function(ADD, |args| Ok(args[0])).unwrap_err();
    ///
    /// assert!(matches!(err, RuntimeError::FunctionAlreadyDefined { .. }));
    /// ```
    #[must_use]
    pub fn with_policy(policy: RegistrationPolicy) -> Self {
        let operations = BUILTIN_TABLE.iter()
                                      .map(|def| {
                                          let func: Operation = Arc::new(def.func);
                                          (def.name.to_string(), func)
                                      })
                                      .collect();

        Self { operations, policy }
    }

    /// Returns the policy applied to duplicate registrations.
    #[must_use]
    pub const fn policy(&self) -> RegistrationPolicy {
        self.policy
    }

    /// Evaluates a parsed infix expression.
    ///
    /// Literals evaluate to themselves. Arithmetic operators, negation and
    /// function calls all go through the operation registry, so they follow
    /// the same promotion rules as [`Calculator::execute_single`].
    pub fn eval(&self, expr: &Expr) -> EvalResult<Number> {
        match expr {
            Expr::Literal { value, .. } => Ok(*value),
            Expr::Negate { expr, .. } => self.eval_negate(expr),
            Expr::BinaryOp { left, op, right, .. } => self.eval_binary_op(left, *op, right),
            Expr::FunctionCall { name, arguments, .. } => {
                self.eval_function_call(name, arguments)
            },
        }
    }

    /// Parses and evaluates an infix expression such as
    /// `"2+12 / 12 + (25-1) / 10"`.
    ///
    /// Supports `+`, `-`, `*`, `/` with the usual precedence, unary minus,
    /// parentheses and calls to registered operations written as
    /// `NAME(arg, ...)`.
    ///
    /// # Errors
    /// Returns [`Error::Parse`] for malformed input and [`Error::Runtime`] if
    /// evaluation fails, for example on an unknown function name.
    ///
    /// # Example
    /// ```
    /// use calcstream::{Calculator, Number};
    ///
    /// let calc = Calculator::new();
    /// let value = calc.execute_str("2+12 / 12 + (25-1) / 10").unwrap();
    ///
    /// assert!((value.as_real() - 5.4).abs() < 1e-12);
    /// ```
    pub fn execute_str(&self, source: &str) -> Result<Number, Error> {
        let tokens = tokenize(source)?;
        let expr = parse(&tokens)?;
        tracing::trace!(source, ?expr, "parsed infix expression");

        Ok(self.eval(&expr)?)
    }
}
