use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Number},
};

/// Type alias for builtin reducer handlers.
///
/// A builtin receives a slice of operands and folds it into one value.
type BuiltinFn = fn(&[Number]) -> EvalResult<Number>;

/// Defines builtin operations by generating their name constants, a lookup
/// table and a name list.
///
/// Each entry provides:
/// - the constant identifier and its string name,
/// - a function pointer implementing the reducer.
macro_rules! builtin_operations {
    (
        $(
            $(#[$meta:meta])*
            $constant:ident = $name:literal => $func:path
        ),* $(,)?
    ) => {
        $(
            $(#[$meta])*
            pub const $constant: &str = $name;
        )*
        pub(crate) struct BuiltinDef {
            pub(crate) name: &'static str,
            pub(crate) func: BuiltinFn,
        }
        pub(crate) static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $constant, func: $func },
            )*
        ];
        /// Names of the operations every calculator starts with.
        pub const BUILTIN_OPERATIONS: &[&str] = &[
            $($constant,)*
        ];
    };
}

builtin_operations! {
    /// Left fold with addition.
    ADD = "ADD" => add,
    /// Left fold with subtraction: `((a - b) - c) ...`.
    SUB = "SUB" => sub,
    /// Left fold with multiplication.
    MUL = "MUL" => mul,
    /// Left fold with floating-point division: `((a / b) / c) ...`.
    DIV = "DIV" => div,
}

/// Folds `args` from the left with `op`.
///
/// A single operand is returned unchanged, without any type promotion.
///
/// # Errors
/// Returns [`RuntimeError::EmptyArguments`] for an empty slice, and whatever
/// `op` returns for a failing step.
///
/// # Example
/// ```
/// use calcstream::{Number, interpreter::evaluator::function::builtin::fold};
///
/// let args = [Number::Integer(20), Number::Integer(3), Number::Integer(2)];
/// let r = fold("SUB", &args, |a, b| a - b).unwrap();
///
/// assert_eq!(r, Number::Integer(15));
/// assert!(fold("SUB", &[], |a, b| a - b).is_err());
/// ```
pub fn fold(name: &str,
            args: &[Number],
            op: fn(Number, Number) -> EvalResult<Number>)
            -> EvalResult<Number> {
    let (first, rest) =
        args.split_first()
            .ok_or_else(|| RuntimeError::EmptyArguments { name: name.to_string() })?;

    rest.iter().try_fold(*first, |acc, next| op(acc, *next))
}

/// Sums all operands. Integral only if every operand is integral.
pub fn add(args: &[Number]) -> EvalResult<Number> {
    fold(ADD, args, |a, b| a + b)
}

/// Subtracts every following operand from the first.
pub fn sub(args: &[Number]) -> EvalResult<Number> {
    fold(SUB, args, |a, b| a - b)
}

/// Multiplies all operands. Integral only if every operand is integral.
pub fn mul(args: &[Number]) -> EvalResult<Number> {
    fold(MUL, args, |a, b| a * b)
}

/// Divides the first operand by every following one.
///
/// # Example
/// ```
/// use calcstream::{Number, interpreter::evaluator::function::builtin::div};
///
/// let r = div(&[Number::Integer(100), Number::Integer(5), Number::Integer(4)]).unwrap();
/// assert_eq!(r, Number::Real(5.0));
/// ```
pub fn div(args: &[Number]) -> EvalResult<Number> {
    fold(DIV, args, |a, b| a / b)
}
