//! Top-level error for one line of input.
//!
//! Wraps the three stage errors so the pipeline composes with `?`.
//! Callers can still branch on the stage and, within a stage, on the
//! structured kind.

use rill_eval::EvalError;
use rill_lexer::LexError;
use rill_parse::ParseError;
use thiserror::Error;

/// Any failure while evaluating one input line.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RillError {
    #[error("syntax error: {0}")]
    Lex(#[from] LexError),
    #[error("syntax error: {0}")]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}
