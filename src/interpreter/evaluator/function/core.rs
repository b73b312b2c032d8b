use std::sync::Arc;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Calculator, EvalResult, RegistrationPolicy},
        value::core::Number,
    },
};

/// A registered operation.
///
/// Receives the ordered operands and reduces them to one value. Operations
/// are `Send + Sync` so a configured calculator can be shared across threads.
pub type Operation = Arc<dyn Fn(&[Number]) -> EvalResult<Number> + Send + Sync>;

impl Calculator {
    /// Registers `reducer` under `name`.
    ///
    /// With [`RegistrationPolicy::Overwrite`] an existing entry, built-ins
    /// included, is replaced. With [`RegistrationPolicy::Reject`] an existing
    /// name is an error and the registry is left untouched.
    ///
    /// # Example
    /// ```
    /// use calcstream::{Calculator, Number};
    ///
    /// let mut calc = Calculator::new();
    /// calc.register_custom_function("SQSUM", |args| {
    ///         args.iter().try_fold(Number::Integer(0), |acc, n| acc + (*n * *n)?)
    ///     })
    ///     .unwrap();
    ///
    /// assert_eq!(calc.execute_single("SQSUM", [3, 2, 5]).unwrap(), Number::Integer(38));
    /// ```
    pub fn register_custom_function<F>(&mut self, name: impl Into<String>, reducer: F) -> EvalResult<()>
        where F: Fn(&[Number]) -> EvalResult<Number> + Send + Sync + 'static
    {
        let name = name.into();
        validate_function_name(self, &name)?;

        let replaced = self.operations.insert(name.clone(), Arc::new(reducer)).is_some();
        tracing::debug!(name = %name, replaced, "registered operation");

        Ok(())
    }

    /// Removes the operation registered under `name` and returns it.
    ///
    /// Built-ins can be removed like any other operation.
    pub fn unregister(&mut self, name: &str) -> Option<Operation> {
        let removed = self.operations.remove(name);
        if removed.is_some() {
            tracing::debug!(name, "unregistered operation");
        }
        removed
    }

    /// Looks up the reducer registered under `name`.
    ///
    /// # Errors
    /// [`RuntimeError::FunctionNotFound`] if nothing is registered.
    pub fn lookup(&self, name: &str) -> EvalResult<&Operation> {
        self.operations
            .get(name)
            .ok_or_else(|| RuntimeError::FunctionNotFound { name: name.to_string() })
    }

    /// Returns `true` if an operation is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }

    /// Returns the registered operation names in sorted order.
    #[must_use]
    pub fn operation_names(&self) -> Vec<&str> {
        let mut names = self.operations.keys().map(String::as_str).collect::<Vec<_>>();
        names.sort_unstable();
        names
    }

    /// Executes a single operation over `values`.
    ///
    /// # Errors
    /// [`RuntimeError::FunctionNotFound`] if `name` is not registered, or the
    /// reducer's own error, such as [`RuntimeError::EmptyArguments`].
    ///
    /// # Example
    /// ```
    /// use calcstream::{Calculator, DIV, Number, SUB};
    ///
    /// let calc = Calculator::new();
    ///
    /// assert_eq!(calc.execute_single(SUB, [12, 3, 2]).unwrap(), Number::Integer(7));
    /// assert_eq!(calc.execute_single(DIV, [10, 2]).unwrap(), Number::Real(5.0));
    /// ```
    pub fn execute_single<I>(&self, name: &str, values: I) -> EvalResult<Number>
        where I: IntoIterator,
              I::Item: Into<Number>
    {
        let operation = self.lookup(name)?;
        let args = values.into_iter().map(Into::into).collect::<Vec<Number>>();
        tracing::trace!(name, operands = args.len(), "executing operation");

        operation(&args)
    }

    /// Evaluates the arguments of a call expression and executes the named
    /// operation over them.
    pub(crate) fn eval_function_call(&self, name: &str, arguments: &[Expr]) -> EvalResult<Number> {
        let arg_vals = arguments.iter()
                                .map(|arg| self.eval(arg))
                                .collect::<EvalResult<Vec<_>>>()?;

        self.execute_single(name, arg_vals)
    }
}

/// Ensures that `name` may be registered under the calculator's policy.
///
/// A name is rejected only when the policy is
/// [`RegistrationPolicy::Reject`] and an operation with the same name already
/// exists.
fn validate_function_name(calculator: &Calculator, name: &str) -> EvalResult<()> {
    if calculator.policy == RegistrationPolicy::Reject && calculator.contains(name) {
        return Err(RuntimeError::FunctionAlreadyDefined { name: name.to_string() });
    }
    Ok(())
}
