//! Parser for rill expressions.
//!
//! Precedence climbing over the token stream. Binding, loosest to
//! tightest: `+ -`, then `* /` (both left-associative), then `^`
//! (right-associative), then unary minus, function calls, and
//! parentheses. So `-2^2` is `(-2)^2` and `2^3^2` is `2^(3^2)`.
//!
//! A call head is an identifier immediately followed by `(`; it takes
//! exactly one argument, and any other count is rejected here rather
//! than at evaluation time. Bare identifiers parse as constant
//! references and are resolved by the evaluator.

use rill_ir::{BinaryOp, Expr, ExprKind, Token, TokenKind, UnaryOp};
use tracing::trace;

mod cursor;
mod error;

use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};

#[cfg(test)]
mod tests;

/// Maximum expression nesting depth.
///
/// Caps the parser's recursion so a pathological input line fails with
/// a [`ParseErrorKind::NestingTooDeep`] error instead of exhausting
/// the stack. The evaluator walks the parsed tree, so its recursion is
/// bounded by the same limit.
const MAX_DEPTH: usize = 256;

/// Parse a token stream into an expression tree.
///
/// The whole stream must form one expression; leftover tokens are a
/// [`ParseErrorKind::TrailingTokens`] error.
pub fn parse(tokens: &[Token]) -> Result<Expr, ParseError> {
    trace!(n_tokens = tokens.len(), "parse");
    let mut parser = Parser {
        cursor: Cursor::new(tokens),
        depth: 0,
    };
    let expr = parser.parse_expr(0)?;
    if let Some(token) = parser.cursor.peek() {
        return Err(ParseError::new(
            token.span,
            ParseErrorKind::TrailingTokens {
                found: token.kind.display_name(),
            },
        ));
    }
    Ok(expr)
}

struct Parser<'t> {
    cursor: Cursor<'t>,
    depth: usize,
}

impl Parser<'_> {
    /// Depth-guarded entry to the climb. Every recursion point goes
    /// through here, so `depth` tracks the live nesting level.
    fn parse_expr(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        if self.depth >= MAX_DEPTH {
            let span = self
                .cursor
                .peek()
                .map_or_else(|| self.cursor.eof_span(), |t| t.span);
            return Err(ParseError::new(
                span,
                ParseErrorKind::NestingTooDeep { limit: MAX_DEPTH },
            ));
        }
        self.depth += 1;
        let result = self.climb(min_bp);
        self.depth -= 1;
        result
    }

    /// Climb: parse a prefix operand, then fold in operators of at
    /// least `min_bp` binding power.
    fn climb(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_prefix()?;

        while let Some(token) = self.cursor.peek() {
            let Some(op) = binary_op(&token.kind) else {
                break;
            };
            let bp = op.precedence();
            if bp < min_bp {
                break;
            }
            self.cursor.advance();

            // Right-associative operators re-enter at their own binding
            // power so the recursion claims the rest of the chain.
            let next_min = if op.is_right_assoc() { bp } else { bp + 1 };
            let rhs = self.parse_expr(next_min)?;

            let span = lhs.span.merge(rhs.span);
            lhs = Expr::new(
                ExprKind::Binary {
                    op,
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                },
                span,
            );
        }

        Ok(lhs)
    }

    /// Parse the prefix position: literal, constant reference, call,
    /// unary minus, or parenthesized group.
    fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
        let Some(token) = self.cursor.peek() else {
            return Err(self.eof_error("an expression"));
        };

        match &token.kind {
            TokenKind::Number(n) => {
                let expr = Expr::new(ExprKind::Number(*n), token.span);
                self.cursor.advance();
                Ok(expr)
            }
            TokenKind::Ident(name) => {
                if matches!(self.cursor.peek2().map(|t| &t.kind), Some(TokenKind::LParen)) {
                    self.parse_call()
                } else {
                    let expr = Expr::new(ExprKind::Constant(name.clone()), token.span);
                    self.cursor.advance();
                    Ok(expr)
                }
            }
            TokenKind::Minus => {
                let minus_span = token.span;
                self.cursor.advance();
                // Tightest binding: re-enter above every infix operator
                // so the operand is the next prefix and `-2^2` negates
                // before exponentiation.
                let operand = self.parse_expr(BinaryOp::Pow.precedence() + 1)?;
                let span = minus_span.merge(operand.span);
                Ok(Expr::new(
                    ExprKind::Unary {
                        op: UnaryOp::Neg,
                        operand: Box::new(operand),
                    },
                    span,
                ))
            }
            TokenKind::LParen => {
                let open_span = token.span;
                self.cursor.advance();
                let inner = self.parse_expr(0)?;
                let close = self.expect_rparen()?;
                Ok(Expr::new(inner.kind, open_span.merge(close)))
            }
            kind => Err(ParseError::new(
                token.span,
                ParseErrorKind::UnexpectedToken {
                    expected: "an expression",
                    found: kind.display_name(),
                },
            )),
        }
    }

    /// Parse `name ( arg )`, rejecting any argument count other than one.
    fn parse_call(&mut self) -> Result<Expr, ParseError> {
        // Caller checked both tokens are present.
        let head = self.cursor.advance();
        let TokenKind::Ident(name) = &head.kind else {
            return Err(ParseError::new(
                head.span,
                ParseErrorKind::UnexpectedToken {
                    expected: "a function name",
                    found: head.kind.display_name(),
                },
            ));
        };
        let name = name.clone();
        let name_span = head.span;
        self.cursor.advance(); // consume '('

        if matches!(self.cursor.peek().map(|t| &t.kind), Some(TokenKind::RParen)) {
            return Err(ParseError::new(
                name_span,
                ParseErrorKind::WrongArgCount { name, found: 0 },
            ));
        }

        let arg = self.parse_expr(0)?;

        // Extra comma-separated arguments are still parsed (so errors
        // inside them surface first), then rejected by count.
        let mut found = 1;
        while matches!(self.cursor.peek().map(|t| &t.kind), Some(TokenKind::Comma)) {
            self.cursor.advance();
            self.parse_expr(0)?;
            found += 1;
        }
        if found != 1 {
            return Err(ParseError::new(
                name_span,
                ParseErrorKind::WrongArgCount { name, found },
            ));
        }

        let close = self.expect_rparen()?;
        Ok(Expr::new(
            ExprKind::Call {
                name,
                arg: Box::new(arg),
            },
            name_span.merge(close),
        ))
    }

    /// Consume a `)`, returning its span.
    fn expect_rparen(&mut self) -> Result<rill_ir::Span, ParseError> {
        match self.cursor.peek() {
            Some(token) if token.kind == TokenKind::RParen => {
                let span = token.span;
                self.cursor.advance();
                Ok(span)
            }
            Some(token) => Err(ParseError::new(
                token.span,
                ParseErrorKind::UnexpectedToken {
                    expected: "')'",
                    found: token.kind.display_name(),
                },
            )),
            None => Err(ParseError::new(
                self.cursor.eof_span(),
                ParseErrorKind::UnclosedParen,
            )),
        }
    }

    fn eof_error(&self, expected: &'static str) -> ParseError {
        ParseError::new(
            self.cursor.eof_span(),
            ParseErrorKind::UnexpectedEof { expected },
        )
    }
}

/// Map an infix token to its operator, or `None` to stop climbing.
fn binary_op(kind: &TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Minus => Some(BinaryOp::Sub),
        TokenKind::Star => Some(BinaryOp::Mul),
        TokenKind::Slash => Some(BinaryOp::Div),
        TokenKind::Caret => Some(BinaryOp::Pow),
        _ => None,
    }
}
