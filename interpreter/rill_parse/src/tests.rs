#![allow(clippy::unwrap_used)]

use crate::{parse, ParseErrorKind};
use pretty_assertions::assert_eq;
use rill_ir::{Expr, ExprKind, Span};
use rill_lexer::tokenize;

fn parse_str(source: &str) -> Expr {
    parse(&tokenize(source).unwrap()).unwrap()
}

fn parse_err(source: &str) -> ParseErrorKind {
    parse(&tokenize(source).unwrap()).unwrap_err().kind
}

/// Flatten a tree back to fully-parenthesized text, to assert shape
/// without spelling out nested `Expr` constructors.
fn shape(expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::Number(n) => format!("{n}"),
        ExprKind::Constant(name) => name.clone(),
        ExprKind::Unary { op, operand } => format!("({op}{})", shape(operand)),
        ExprKind::Binary { op, lhs, rhs } => {
            format!("({} {op} {})", shape(lhs), shape(rhs))
        }
        ExprKind::Call { name, arg } => format!("{name}({})", shape(arg)),
    }
}

// === Operands ===

#[test]
fn parses_number_literal() {
    assert_eq!(shape(&parse_str("42")), "42");
}

#[test]
fn parses_bare_ident_as_constant() {
    assert_eq!(
        parse_str("pi").kind,
        ExprKind::Constant("pi".to_string())
    );
}

#[test]
fn parses_function_call() {
    assert_eq!(shape(&parse_str("sqrt(4)")), "sqrt(4)");
}

#[test]
fn parses_nested_call_argument() {
    assert_eq!(shape(&parse_str("sin(cos(0) + 1)")), "sin((cos(0) + 1))");
}

// === Precedence and associativity ===

#[test]
fn mul_binds_tighter_than_add() {
    assert_eq!(shape(&parse_str("2 + 3 * 4")), "(2 + (3 * 4))");
}

#[test]
fn add_and_sub_are_left_associative() {
    assert_eq!(shape(&parse_str("1 - 2 + 3")), "((1 - 2) + 3)");
}

#[test]
fn div_is_left_associative() {
    assert_eq!(shape(&parse_str("8 / 4 / 2")), "((8 / 4) / 2)");
}

#[test]
fn pow_is_right_associative() {
    assert_eq!(shape(&parse_str("2 ^ 3 ^ 2")), "(2 ^ (3 ^ 2))");
}

#[test]
fn parens_override_precedence() {
    assert_eq!(shape(&parse_str("(2 + 3) * 4")), "((2 + 3) * 4)");
}

#[test]
fn unary_minus_binds_tighter_than_pow() {
    assert_eq!(shape(&parse_str("-2 ^ 2")), "((-2) ^ 2)");
}

#[test]
fn unary_minus_nests() {
    assert_eq!(shape(&parse_str("--3")), "(-(-3))");
}

#[test]
fn unary_minus_applies_to_calls() {
    assert_eq!(shape(&parse_str("-sqrt(4)")), "(-sqrt(4))");
}

// === Spans ===

#[test]
fn binary_span_covers_both_operands() {
    let expr = parse_str("12 + 345");
    assert_eq!(expr.span, Span::new(0, 8));
}

#[test]
fn call_span_covers_name_through_rparen() {
    let expr = parse_str(" sin(0)");
    assert_eq!(expr.span, Span::new(1, 7));
}

// === Errors ===

#[test]
fn missing_operand_is_unexpected_eof() {
    assert_eq!(
        parse_err("2 + "),
        ParseErrorKind::UnexpectedEof {
            expected: "an expression"
        }
    );
}

#[test]
fn empty_input_is_unexpected_eof() {
    assert_eq!(
        parse(&[]).unwrap_err().kind,
        ParseErrorKind::UnexpectedEof {
            expected: "an expression"
        }
    );
}

#[test]
fn operator_in_operand_position_is_rejected() {
    assert_eq!(
        parse_err("2 + * 3"),
        ParseErrorKind::UnexpectedToken {
            expected: "an expression",
            found: "'*'"
        }
    );
}

#[test]
fn unclosed_paren_is_reported_at_end_of_input() {
    let err = parse(&tokenize("(2 + 3").unwrap()).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnclosedParen);
    assert_eq!(err.span, Span::new(6, 6));
}

#[test]
fn stray_close_paren_is_trailing() {
    assert_eq!(
        parse_err("2 + 3)"),
        ParseErrorKind::TrailingTokens { found: "')'" }
    );
}

#[test]
fn adjacent_operands_are_trailing_tokens() {
    assert_eq!(
        parse_err("1 2"),
        ParseErrorKind::TrailingTokens { found: "number" }
    );
}

#[test]
fn empty_call_is_wrong_arg_count() {
    assert_eq!(
        parse_err("sin()"),
        ParseErrorKind::WrongArgCount {
            name: "sin".to_string(),
            found: 0
        }
    );
}

#[test]
fn two_arguments_are_wrong_arg_count() {
    assert_eq!(
        parse_err("sin(1, 2)"),
        ParseErrorKind::WrongArgCount {
            name: "sin".to_string(),
            found: 2
        }
    );
}

#[test]
fn arity_error_message_names_the_function() {
    let err = parse(&tokenize("log(1, 2, 3)").unwrap()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "function 'log' takes 1 argument, found 3 at 0..3"
    );
}

// === Nesting depth ===

#[test]
fn deeply_nested_parens_fail_cleanly() {
    let source = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    let err = parse(&tokenize(&source).unwrap()).unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::NestingTooDeep { .. }));
}

#[test]
fn long_unary_chains_fail_cleanly() {
    let source = format!("{}1", "-".repeat(10_000));
    let err = parse(&tokenize(&source).unwrap()).unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::NestingTooDeep { .. }));
}

#[test]
fn long_power_chains_fail_cleanly() {
    let source = "2".to_string() + &" ^ 2".repeat(10_000);
    let err = parse(&tokenize(&source).unwrap()).unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::NestingTooDeep { .. }));
}

#[test]
fn moderate_nesting_still_parses() {
    let source = format!("{}7{}", "(".repeat(64), ")".repeat(64));
    assert_eq!(shape(&parse_str(&source)), "7");
}

#[test]
fn unknown_names_are_deferred_to_evaluation() {
    // The parser has no registry; `bar` parses as a constant reference
    // and the evaluator decides whether it exists.
    assert_eq!(shape(&parse_str("bar + 1")), "(bar + 1)");
}
