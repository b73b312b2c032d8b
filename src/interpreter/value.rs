/// Stream token representation.
///
/// Defines the `Token` type that makes up the flat sequences accepted by
/// [`Calculator::execute_expression`], along with the `tokens!` macro used to
/// build them from mixed literals.
///
/// [`Calculator::execute_expression`]: crate::interpreter::evaluator::core::Calculator::execute_expression
pub mod token;

pub mod core;
