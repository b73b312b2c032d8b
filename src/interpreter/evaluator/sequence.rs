use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Calculator, EvalResult},
        value::{core::Number, token::Token},
    },
};

/// An operation waiting for the rest of its operands.
struct PendingGroup<'a> {
    operation: &'a str,
    operands:  Vec<Number>,
}

impl<'a> PendingGroup<'a> {
    const fn new(operation: &'a str) -> Self {
        Self { operation,
               operands: Vec::new() }
    }
}

impl Calculator {
    /// Evaluates a flat sequence of operation names and operands.
    ///
    /// Every operation name opens a group. When the next operation name
    /// arrives, the open group is executed and its result becomes the first
    /// operand of the new group, so `ADD 2 3 4 DIV 2 SUB 12` computes
    /// `((2 + 3 + 4) / 2) - 12`. Tokens before the first operation name are
    /// ignored. The last group is executed once the sequence ends.
    ///
    /// A name that is not a registered operation is treated as an operand.
    ///
    /// # Errors
    /// Every failure is reported as [`RuntimeError::WrongExpression`], with
    /// the underlying error available as its source.
    ///
    /// # Example
    /// ```
    /// use calcstream::{ADD, Calculator, DIV, Number, SUB, tokens};
    ///
    /// let calc = Calculator::new();
    /// let result = calc.execute_expression(&tokens![ADD, 2, 3, 4, DIV, 2, SUB, 12]).unwrap();
    ///
    /// assert_eq!(result, Number::Real(-7.5));
    ///
    /// // Leading operands are dropped, so this is just `ADD 1 2`.
    /// let result = calc.execute_expression(&tokens![7, 8, ADD, 1, 2]).unwrap();
    /// assert_eq!(result, Number::Integer(3));
    /// ```
    pub fn execute_expression(&self, tokens: &[Token]) -> EvalResult<Number> {
        self.fold_sequence(tokens).map_err(|cause| {
                                      tracing::debug!(%cause, "rejected token sequence");
                                      RuntimeError::wrong_expression(cause)
                                  })
    }

    /// Returns `true` if `token` names a registered operation.
    #[must_use]
    pub fn is_operation(&self, token: &Token) -> bool {
        token.as_name().is_some_and(|name| self.contains(name))
    }

    fn fold_sequence(&self, tokens: &[Token]) -> EvalResult<Number> {
        let mut pending: Option<PendingGroup<'_>> = None;

        for token in tokens {
            if let Some(name) = token.as_name()
               && self.contains(name)
            {
                let mut next = PendingGroup::new(name);
                if let Some(group) = pending.take() {
                    next.operands.push(self.execute_group(&group)?);
                }
                pending = Some(next);
            } else if let Some(group) = pending.as_mut() {
                group.operands.push(token.as_number()?);
            }
        }

        let group = pending.ok_or(RuntimeError::MissingOperation)?;
        self.execute_group(&group)
    }

    fn execute_group(&self, group: &PendingGroup<'_>) -> EvalResult<Number> {
        let result = self.execute_single(group.operation, group.operands.iter().copied())?;
        tracing::trace!(operation = group.operation,
                        operands = group.operands.len(),
                        %result,
                        "applied group");
        Ok(result)
    }
}
