//! Shared IR types for the rill expression evaluator.
//!
//! Everything that crosses a stage boundary lives here: byte-offset
//! spans, the token stream produced by `rill_lexer`, and the expression
//! tree produced by `rill_parse` and walked by `rill_eval`.

mod ast;
mod span;
mod token;

pub use ast::{BinaryOp, Expr, ExprKind, UnaryOp};
pub use span::Span;
pub use token::{Token, TokenKind};
