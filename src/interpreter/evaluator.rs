/// Binary operator evaluation logic.
///
/// Routes the infix arithmetic operators through the operation registry.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation for infix expressions.
pub mod unary;

/// Core evaluation logic and calculator state.
///
/// Contains the `Calculator` type, its configuration, the AST evaluation
/// dispatcher and the string-expression entry point.
pub mod core;

/// Evaluation of flat token sequences.
///
/// Groups operands behind the operation name that precedes them and folds the
/// groups left to right, feeding each result into the next group.
pub mod sequence;

/// Operation registry and reducers.
///
/// Handles registration, lookup and execution of named operations, including
/// the built-in arithmetic reducers.
pub mod function;
