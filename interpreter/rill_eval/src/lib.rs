//! Evaluator for rill expression trees.
//!
//! A recursive post-order walk: children are evaluated before their
//! parent operator or function is applied. All arithmetic is IEEE-754
//! double precision; non-finite intermediate values are legal, and the
//! caller decides what to do with a non-finite final result.
//!
//! Identifier resolution happens here, not in the parser: bare names
//! go through the constant registry and call heads through the
//! function registry, both owned by the caller and passed by
//! reference.

use rill_ir::{BinaryOp, Expr, ExprKind, Span, UnaryOp};

mod error;
mod registry;

pub use error::{EvalError, EvalErrorKind};
pub use registry::{FnEntry, Registry};


/// Evaluate an expression tree to a single `f64`.
pub fn evaluate(expr: &Expr, registry: &Registry) -> Result<f64, EvalError> {
    match &expr.kind {
        ExprKind::Number(n) => Ok(*n),
        ExprKind::Constant(name) => registry.lookup_const(name).ok_or_else(|| {
            EvalError::new(expr.span, EvalErrorKind::UnknownIdentifier(name.clone()))
        }),
        ExprKind::Unary {
            op: UnaryOp::Neg,
            operand,
        } => Ok(-evaluate(operand, registry)?),
        ExprKind::Binary { op, lhs, rhs } => {
            let left = evaluate(lhs, registry)?;
            let right = evaluate(rhs, registry)?;
            apply_binary(*op, left, right, rhs.span)
        }
        ExprKind::Call { name, arg } => {
            let Some(entry) = registry.lookup_fn(name) else {
                return Err(EvalError::new(
                    expr.span,
                    EvalErrorKind::UnknownFunction(name.clone()),
                ));
            };
            let input = evaluate(arg, registry)?;
            if !(entry.domain)(input) {
                return Err(EvalError::new(
                    expr.span,
                    EvalErrorKind::Domain {
                        what: entry.domain_hint.to_string(),
                    },
                ));
            }
            Ok((entry.apply)(input))
        }
    }
}

/// Apply an infix operator to already-evaluated operands.
///
/// `rhs_span` points at the right operand, so division-by-zero and
/// exponent errors name the operand that caused them.
fn apply_binary(op: BinaryOp, left: f64, right: f64, rhs_span: Span) -> Result<f64, EvalError> {
    match op {
        BinaryOp::Add => Ok(left + right),
        BinaryOp::Sub => Ok(left - right),
        BinaryOp::Mul => Ok(left * right),
        BinaryOp::Div => {
            if right == 0.0 {
                Err(EvalError::new(rhs_span, EvalErrorKind::DivisionByZero))
            } else {
                Ok(left / right)
            }
        }
        BinaryOp::Pow => {
            // powf would return NaN here; report it as what it is.
            if left < 0.0 && right.fract() != 0.0 {
                Err(EvalError::new(
                    rhs_span,
                    EvalErrorKind::Domain {
                        what: "negative base with fractional exponent".to_string(),
                    },
                ))
            } else {
                Ok(left.powf(right))
            }
        }
    }
}
