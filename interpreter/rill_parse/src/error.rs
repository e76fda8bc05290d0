//! Parse error types.
//!
//! Every error carries the span of the token (or end of input) that
//! broke the grammar, plus a kind the caller can branch on without
//! string matching.

use rill_ir::Span;
use thiserror::Error;

/// A parse error with the span of the offending token.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} at {span}")]
pub struct ParseError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(span: Span, kind: ParseErrorKind) -> Self {
        ParseError { span, kind }
    }
}

/// What kind of parse error occurred.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A token that cannot appear here (e.g. `2 + * 3`).
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: &'static str,
    },
    /// The expression ended mid-grammar (e.g. `2 + `).
    #[error("expected {expected}, found end of input")]
    UnexpectedEof { expected: &'static str },
    /// A `(` with no matching `)`.
    #[error("missing closing ')'")]
    UnclosedParen,
    /// A function call with an argument count other than one.
    /// Raised here, not at evaluation time: arity is part of the
    /// grammar for this fixed single-argument function set.
    #[error("function '{name}' takes 1 argument, found {found}")]
    WrongArgCount { name: String, found: usize },
    /// Leftover tokens after a complete expression (e.g. `1 2`).
    #[error("unexpected {found} after expression")]
    TrailingTokens { found: &'static str },
    /// Nesting past the fixed recursion limit. Parsing is recursive,
    /// so a pathological line of nested parentheses could otherwise
    /// overflow the stack and take the whole session down.
    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
