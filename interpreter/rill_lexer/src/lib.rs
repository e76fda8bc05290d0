//! Tokenizer for rill expressions, built on logos.
//!
//! Produces a flat, spanned token stream. Grammar validation (operand
//! placement, paren matching, call arity) is the parser's job; the
//! lexer only rejects text that forms no token at all.

use logos::Logos;
use rill_ir::{Span, Token, TokenKind};

mod error;

pub use error::{LexError, LexErrorKind};


/// Raw token from logos, before span attachment.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")] // Skip whitespace
enum RawToken {
    // Numeric literal: integer or decimal, optional exponent.
    // Negation is not folded here; `-` is always its own token.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", |lex| {
        lex.slice().parse::<f64>().ok()
    })]
    Number(f64),

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("^")]
    Caret,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
}

/// Lex one input line into a token stream.
///
/// Stops at the first unrecognized byte or malformed number and
/// reports it with its span.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();

        match token_result {
            Ok(raw) => {
                let kind = convert_token(raw, slice);
                tokens.push(Token::new(kind, span));
            }
            Err(()) => {
                // The error slice is never empty: logos only reports an
                // error after consuming at least one byte.
                let c = slice.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(LexError {
                    span,
                    kind: LexErrorKind::UnexpectedChar(c),
                });
            }
        }
    }

    Ok(tokens)
}

/// Convert a raw token to a `TokenKind`, copying identifier text.
fn convert_token(raw: RawToken, slice: &str) -> TokenKind {
    match raw {
        RawToken::Number(n) => TokenKind::Number(n),
        RawToken::Ident => TokenKind::Ident(slice.to_string()),
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Caret => TokenKind::Caret,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::Comma => TokenKind::Comma,
    }
}
