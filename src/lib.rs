//! # calcstream
//!
//! calcstream evaluates arithmetic written as a flat sequence of operation
//! names and numbers, such as `ADD 2 3 4 DIV 2 SUB 12`, against a registry of
//! named reducers. The registry starts with `ADD`, `SUB`, `MUL` and `DIV` and
//! accepts custom operations at runtime.
//!
//! Numbers are either integral or floating. Addition, subtraction and
//! multiplication stay integral when both sides are; division is always
//! floating.
//!
//! ```
//! use calcstream::{ADD, Calculator, DIV, Number, SUB, tokens};
//!
//! let calc = Calculator::new();
//!
//! assert_eq!(calc.execute_single(ADD, [2, 3]).unwrap(), Number::Integer(5));
//! assert_eq!(calc.execute_expression(&tokens![ADD, 2, 3, 4, DIV, 2, SUB, 12]).unwrap(),
//!            Number::Real(-7.5));
//! ```
//!
//! Infix strings are supported as well, see [`Calculator::execute_str`].

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed infix expressions.
///
/// This module declares the `Expr` enum and the binary operators. The AST is
/// built by the parser and traversed by the evaluator.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating. Token-sequence failures are wrapped in a single
/// `WrongExpression` error that keeps the underlying failure as its source.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Attaches byte offsets and names for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the execution of operations and expressions.
///
/// This module ties together lexing, parsing, evaluation and the value
/// types, and exposes the `Calculator` that owns the operation registry.
pub mod interpreter;

pub use crate::{
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        evaluator::{
            core::{Calculator, EvalResult, RegistrationPolicy},
            function::{
                builtin::{ADD, BUILTIN_OPERATIONS, DIV, MUL, SUB},
                core::Operation,
            },
        },
        value::{core::Number, token::Token},
    },
};

/// Evaluates an infix expression with a fresh calculator holding only the
/// built-in operations.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use calcstream::{Number, evaluate};
///
/// assert_eq!(evaluate("2 * (3 + 4)").unwrap(), Number::Integer(14));
///
/// // `SQRT` is not a registered operation.
/// assert!(evaluate("SQRT(4)").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Number, Error> {
    Calculator::new().execute_str(source)
}
