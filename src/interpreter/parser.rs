/// Entry points of the parser.
///
/// Holds the top-level `parse` function and the expression rule that starts
/// the precedence descent.
pub mod core;

/// Unary and primary expression parsing.
///
/// Handles negation, literals, parenthesized groups and operation calls.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the additive and multiplicative precedence levels, both
/// left-associative.
pub mod binary;

/// Utility functions for the parser.
///
/// Provides helpers shared by several grammar rules.
pub mod utils;
