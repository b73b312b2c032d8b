use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{Calculator, EvalResult},
        value::core::Number,
    },
};

impl Calculator {
    /// Evaluates a binary arithmetic expression.
    ///
    /// Both sides are evaluated left first, then the operator's registry
    /// entry (`ADD`, `SUB`, `MUL` or `DIV`) is executed over the two values.
    /// Re-registering one of those names therefore changes what the infix
    /// operator does.
    ///
    /// A left-leaning chain such as `1 + 2 + 3 + ...` is walked iteratively,
    /// so long flat expressions do not grow the call stack.
    ///
    /// # Example
    /// ```
    /// use calcstream::{Calculator, Number};
    ///
    /// let mut calc = Calculator::new();
    /// calc.register_custom_function("ADD", |args| Ok(Number::Integer(args.len() as i64)))
    ///     .unwrap();
    ///
    /// assert_eq!(calc.execute_str("40 + 2").unwrap(), Number::Integer(2));
    /// ```
    pub(crate) fn eval_binary_op(&self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr)
                                 -> EvalResult<Number> {
        let mut pending = vec![(op, right)];
        let mut innermost = left;
        while let Expr::BinaryOp { left, op, right, .. } = innermost {
            pending.push((*op, right.as_ref()));
            innermost = left.as_ref();
        }

        let mut acc = self.eval(innermost)?;
        for (op, right) in pending.into_iter().rev() {
            let right = self.eval(right)?;
            acc = self.execute_single(op.operation_name(), [acc, right])?;
        }
        Ok(acc)
    }
}
