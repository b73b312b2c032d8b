use crate::{
    ast::Expr,
    interpreter::{
        evaluator::core::{Calculator, EvalResult},
        value::core::Number,
    },
};

impl Calculator {
    /// Evaluates arithmetic negation.
    ///
    /// Integers stay integral; negating `i64::MIN` is an overflow error.
    pub(crate) fn eval_negate(&self, expr: &Expr) -> EvalResult<Number> {
        let value = self.eval(expr)?;
        -value
    }
}
