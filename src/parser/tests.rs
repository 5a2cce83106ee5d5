//! Unit tests for the parser module.
//!
//! - Precedence and associativity
//! - Unary operators and grouping
//! - Syntax errors and the nesting limit

use pretty_assertions::assert_eq;

use super::parser::{parse, parse_with_limit};
use crate::{
    ast::expressions::{BinaryOp, Expr, UnaryOp},
    errors::errors::{ErrorImpl, ErrorKind},
    Position,
};

fn num(value: i64) -> Expr {
    Expr::number(value)
}

fn neg(operand: Expr) -> Expr {
    Expr::unary(UnaryOp::Minus, operand)
}

#[test]
fn test_parse_number() {
    assert_eq!(parse("42").unwrap(), num(42));
}

#[test]
fn test_parse_multiplication_binds_tighter() {
    assert_eq!(
        parse("1+2*3").unwrap(),
        Expr::binary(
            BinaryOp::Add,
            num(1),
            Expr::binary(BinaryOp::Mul, num(2), num(3))
        )
    );
}

#[test]
fn test_parse_grouping_overrides_precedence() {
    assert_eq!(
        parse("(1+2)*3").unwrap(),
        Expr::binary(
            BinaryOp::Mul,
            Expr::binary(BinaryOp::Add, num(1), num(2)),
            num(3)
        )
    );
}

#[test]
fn test_parse_left_associative() {
    assert_eq!(parse("10-4-3").unwrap().to_string(), "(- (- 10 4) 3)");
    assert_eq!(parse("64/8/2").unwrap().to_string(), "(/ (/ 64 8) 2)");
    assert_eq!(parse("8/4*2").unwrap().to_string(), "(* (/ 8 4) 2)");
}

#[test]
fn test_parse_unary_binds_tighter_than_binary() {
    assert_eq!(parse("-2*3").unwrap().to_string(), "(* (- 2) 3)");
    assert_eq!(parse("-1+2").unwrap().to_string(), "(+ (- 1) 2)");
    assert_eq!(parse("2*-3").unwrap().to_string(), "(* 2 (- 3))");
}

#[test]
fn test_parse_nested_unary() {
    assert_eq!(parse("--5").unwrap(), neg(neg(num(5))));
    assert_eq!(parse("-(-5)").unwrap(), neg(neg(num(5))));
    assert_eq!(
        parse("-+-3").unwrap(),
        neg(Expr::unary(UnaryOp::Plus, neg(num(3))))
    );
}

#[test]
fn test_parse_complex_expression() {
    assert_eq!(
        parse("(10 - 3) * (7 - 5) + 42").unwrap().to_string(),
        "(+ (* (- 10 3) (- 7 5)) 42)"
    );
    assert_eq!(
        parse("-(3 + 4) / 2").unwrap().to_string(),
        "(/ (- (+ 3 4)) 2)"
    );
}

#[test]
fn test_parse_is_repeatable() {
    let source = "(1 + -2) * 3 / (4 - 5)";

    assert_eq!(parse(source).unwrap(), parse(source).unwrap());
}

#[test]
fn test_parse_trailing_input() {
    let error = parse("1+2 3").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::TrailingInput {
            found: String::from("number `3`")
        }
    );
    assert_eq!(error.get_position(), &Position(4));
}

#[test]
fn test_parse_missing_close_paren() {
    let error = parse("(1+2").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedToken {
            expected: String::from("`)`"),
            found: String::from("end of input"),
        }
    );
    assert_eq!(error.get_position(), &Position(4));
}

#[test]
fn test_parse_unmatched_close_paren() {
    let error = parse("1+2)").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::TrailingInput {
            found: String::from("`)`")
        }
    );
}

#[test]
fn test_parse_missing_operand() {
    for source in ["", "1+", "*2", "()", "(1+)*2", "3 - - "] {
        let error = parse(source).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Syntax, "source: {source:?}");
    }
}

#[test]
fn test_parse_reports_lexical_errors() {
    let error = parse("1+2&3").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Lexical);
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnrecognisedToken { token: '&' }
    );
}

#[test]
fn test_parse_stops_at_first_error() {
    // The trailing token is rejected before the lexer reaches `&`.
    let error = parse("1 2 &").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Syntax);
}

#[test]
fn test_parse_nesting_limit() {
    assert!(parse_with_limit("((1))", 2).is_ok());
    assert!(parse_with_limit("-(1)", 2).is_ok());

    let error = parse_with_limit("(((1)))", 2).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::NestingTooDeep);
    assert_eq!(error.get_impl(), &ErrorImpl::NestingTooDeep { limit: 2 });
    assert_eq!(error.get_position(), &Position(2));

    let error = parse_with_limit("---1", 2).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::NestingTooDeep);
}

#[test]
fn test_parse_nesting_limit_counts_depth_not_total() {
    // Siblings do not accumulate depth.
    assert!(parse_with_limit("(1)+(2)*(-3)", 2).is_ok());
    assert!(parse_with_limit("7", 0).is_ok());
    assert!(parse_with_limit("(7)", 0).is_err());
}

#[test]
fn test_parse_default_limit_rejects_deep_input() {
    let depth = crate::DEFAULT_MAX_DEPTH + 1;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));

    let error = parse(&source).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::NestingTooDeep);

    let depth = crate::DEFAULT_MAX_DEPTH;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(parse(&source).unwrap(), num(1));
}
