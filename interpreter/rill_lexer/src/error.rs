//! Lexer error types.

use rill_ir::Span;
use thiserror::Error;

/// A lexer error with the span of the offending source text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} at {span}")]
pub struct LexError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
}

/// What kind of lexer error occurred.
///
/// There is only one: text that forms no token. Numeric literals the
/// scanner matches always parse (overflow gives infinity, not a parse
/// failure), so there is no malformed-number case to report.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// A byte that starts no token (e.g. `2 $ 3`).
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
}
