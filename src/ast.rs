use crate::interpreter::{
    evaluator::function::builtin::{ADD, DIV, MUL, SUB},
    value::core::Number,
};

/// An abstract syntax tree (AST) node for an infix expression.
///
/// Every variant records the byte offset of the token that produced it, for
/// error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal {
        /// The constant value.
        value:    Number,
        /// Byte offset in the source.
        position: usize,
    },
    /// Arithmetic negation, `-expr`.
    Negate {
        /// The operand expression.
        expr:     Box<Self>,
        /// Byte offset in the source.
        position: usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator.
        position: usize,
    },
    /// Call of a registered operation (e.g. `ADD(1, 2, 3)`).
    FunctionCall {
        /// Name of the operation being called.
        name:      String,
        /// Arguments to the operation.
        arguments: Vec<Self>,
        /// Byte offset in the source.
        position:  usize,
    },
}

impl Expr {
    /// Returns the byte offset this node was parsed from.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. }
            | Self::Negate { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::FunctionCall { position, .. } => *position,
        }
    }
}

/// Infix arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Name of the registry operation that implements this operator.
    #[must_use]
    pub const fn operation_name(self) -> &'static str {
        match self {
            Self::Add => ADD,
            Self::Sub => SUB,
            Self::Mul => MUL,
            Self::Div => DIV,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{symbol}")
    }
}
