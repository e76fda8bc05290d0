//! Read-only cursor over the token slice.
//!
//! The parser never mutates tokens; it only moves a position forward.
//! There is no EOF sentinel in the stream, so every read is an
//! `Option` and callers decide how to report exhaustion.

use rill_ir::{Span, Token};
use tracing::trace;

pub(crate) struct Cursor<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Cursor<'t> {
    pub(crate) fn new(tokens: &'t [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Current token without consuming it.
    #[inline]
    pub(crate) fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    /// Token after the current one, for call-head lookahead.
    #[inline]
    pub(crate) fn peek2(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos + 1)
    }

    /// Consume and return the current token.
    ///
    /// Callers check `peek()` first, so the position is always in
    /// bounds here.
    #[inline]
    pub(crate) fn advance(&mut self) -> &'t Token {
        let current = self.pos;
        debug_assert!(
            current < self.tokens.len(),
            "advance past end of token stream"
        );
        let token = &self.tokens[current];
        trace!(
            pos = current,
            kind = token.kind.display_name(),
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        self.pos += 1;
        token
    }

    /// Span just past the last token, for end-of-input errors.
    pub(crate) fn eof_span(&self) -> Span {
        match self.tokens.last() {
            Some(token) => Span::new(token.span.end, token.span.end),
            None => Span::new(0, 0),
        }
    }
}
