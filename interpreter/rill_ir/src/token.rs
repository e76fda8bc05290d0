//! Tokens produced by the lexer.
//!
//! The stream is flat and order-preserving; grammar checks belong to
//! the parser. Each token carries the span of the source text it was
//! lexed from, so later stages can point at the offending bytes.

use crate::Span;
use std::fmt;

/// A single token with its source span.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// What kind of token was lexed.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// Numeric literal: `42`, `3.14`, `2.5e-8`. Negation is folded in
    /// the parser, never here.
    Number(f64),
    /// Identifier: a constant name or, when followed by `(`, a
    /// function-call head. Which one is the parser's decision.
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    Caret,

    LParen,
    RParen,
    Comma,
}

impl TokenKind {
    /// Human-readable name for error messages and trace output.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Number(_) => "number",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::Caret => "'^'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::Comma => "','",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "{n}"),
            TokenKind::Ident(name) => write!(f, "{name}"),
            _ => f.write_str(self.display_name().trim_matches('\'')),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_name_quotes_punctuation() {
        assert_eq!(TokenKind::Caret.display_name(), "'^'");
        assert_eq!(TokenKind::Number(1.0).display_name(), "number");
    }

    #[test]
    fn display_renders_source_text() {
        assert_eq!(TokenKind::Ident("sin".into()).to_string(), "sin");
        assert_eq!(TokenKind::LParen.to_string(), "(");
    }
}
