use crate::{
    ast::expressions::Expr,
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{binary_operator, bp_lookup, nud_lookup, prefix_operator, BindingPower},
    parser::Parser,
};

/// Parses operands and every infix operator binding tighter than `bp`.
///
/// `Default` parses a full expression, `Additive` a term (a run of `*`/`/`),
/// and `Unary` a single factor.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let Some(nud) = nud_lookup(parser.current_token_kind()) else {
        return Err(parser.unexpected("a number, `(`, `+` or `-`"));
    };

    let mut left = nud(parser)?;

    // Operators of equal power stop the loop, which makes them left-associative
    while bp_lookup(parser.current_token_kind()) > bp {
        left = parse_binary_expr(parser, left)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Number(value) => {
            parser.advance()?;
            Ok(Expr::number(value))
        }
        _ => Err(parser.unexpected("a number")),
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr) -> Result<Expr, Error> {
    let operator_token = parser.advance()?;
    let Some(op) = binary_operator(operator_token.kind) else {
        unreachable!(
            "{} has an infix binding power but no binary operator",
            operator_token.kind
        );
    };

    let right = parse_expr(parser, bp_lookup(operator_token.kind))?;

    Ok(Expr::binary(op, left, right))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.enter_nested()?;

    let operator_token = parser.advance()?;
    let Some(op) = prefix_operator(operator_token.kind) else {
        unreachable!("{} was dispatched as a prefix operator", operator_token.kind);
    };

    let operand = parse_expr(parser, BindingPower::Unary)?;
    parser.exit_nested();

    Ok(Expr::unary(op, operand))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.enter_nested()?;

    parser.expect(TokenKind::OpenParen)?;
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    parser.exit_nested();
    Ok(expr)
}
