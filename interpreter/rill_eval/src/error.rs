//! Evaluation error types.

use rill_ir::Span;
use thiserror::Error;

/// An evaluation error with the span of the expression that failed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} at {span}")]
pub struct EvalError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: EvalErrorKind,
}

impl EvalError {
    pub fn new(span: Span, kind: EvalErrorKind) -> Self {
        EvalError { span, kind }
    }
}

/// What kind of evaluation error occurred.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    /// Right operand of `/` was exactly zero.
    #[error("division by zero")]
    DivisionByZero,
    /// An operator or function was applied outside its valid input
    /// range (e.g. `sqrt(-1)`, negative base with fractional exponent).
    #[error("domain error: {what}")]
    Domain { what: String },
    /// A bare identifier with no entry in the constant registry.
    #[error("unknown identifier '{0}'")]
    UnknownIdentifier(String),
    /// A call head with no entry in the function registry.
    #[error("unknown function '{0}'")]
    UnknownFunction(String),
}
