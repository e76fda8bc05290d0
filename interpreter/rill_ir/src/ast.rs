//! The expression tree.
//!
//! Ownership is tree-exclusive: every child is a `Box<Expr>` with a
//! single parent, no sharing and no cycles. Trees are built per input
//! line and dropped after evaluation.

use crate::Span;
use std::fmt;

/// An expression node with the span of the source text it covers.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub const fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

/// Expression variants.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    /// Numeric literal.
    Number(f64),
    /// Bare identifier, resolved against the constant registry at
    /// evaluation time.
    Constant(String),
    /// Prefix operator application.
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// Infix operator application.
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// Unary function call: `name(arg)`. Arity is fixed at one by
    /// construction; the parser rejects anything else.
    Call { name: String, arg: Box<Expr> },
}

/// Infix operators, loosest-binding first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    /// Exponentiation. Right-associative: `2^3^2` is `2^(3^2)`.
    Pow,
}

impl BinaryOp {
    /// Binding power for precedence climbing. Higher binds tighter.
    ///
    /// Unary minus and function calls bind tighter than all of these;
    /// they are handled in the parser's prefix position.
    #[inline]
    pub const fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 1,
            BinaryOp::Mul | BinaryOp::Div => 2,
            BinaryOp::Pow => 3,
        }
    }

    /// Whether the operator groups from the right.
    #[inline]
    pub const fn is_right_assoc(self) -> bool {
        matches!(self, BinaryOp::Pow)
    }

    /// Source symbol for error and trace output.
    pub const fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "^",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Prefix operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("-")
    }
}
