/// The evaluator module executes operations and computes results.
///
/// The evaluator owns the operation registry, folds flat token sequences
/// group by group, and walks the AST of infix expressions. It is the core
/// execution engine of the crate.
///
/// # Responsibilities
/// - Registers, looks up and executes named operations.
/// - Evaluates token sequences and infix expressions.
/// - Reports runtime errors such as unknown operations or empty operand lists.
pub mod evaluator;
/// The lexer module tokenizes infix expression strings.
///
/// The lexer reads the raw source text and produces a stream of lexemes:
/// numbers, identifiers, operators and delimiters, each paired with its byte
/// offset.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from lexemes.
///
/// A recursive-descent parser with two precedence levels (`+ -` below
/// `* /`), unary minus, parentheses and operation calls.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Number` type and its promotion rules between integral and
///   floating values.
/// - Defines the `Token` type that makes up flat expression sequences.
pub mod value;
