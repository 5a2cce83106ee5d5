use crate::{
    ast::expressions::{BinaryOp, Expr, UnaryOp},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Additive,
    Multiplicative,
    Unary,
}

pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;

/// Handler for a token that can start an operand.
pub fn nud_lookup(kind: TokenKind) -> Option<NUDHandler> {
    match kind {
        TokenKind::Number(_) => Some(parse_primary_expr as NUDHandler),
        TokenKind::OpenParen => Some(parse_grouping_expr as NUDHandler),
        TokenKind::Plus | TokenKind::Dash => Some(parse_prefix_expr as NUDHandler),
        _ => None,
    }
}

/// Binding power of `kind` in infix position.
pub fn bp_lookup(kind: TokenKind) -> BindingPower {
    match kind {
        TokenKind::Plus | TokenKind::Dash => BindingPower::Additive,
        TokenKind::Star | TokenKind::Slash => BindingPower::Multiplicative,
        _ => BindingPower::Default,
    }
}

pub fn binary_operator(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Dash => Some(BinaryOp::Sub),
        TokenKind::Star => Some(BinaryOp::Mul),
        TokenKind::Slash => Some(BinaryOp::Div),
        _ => None,
    }
}

pub fn prefix_operator(kind: TokenKind) -> Option<UnaryOp> {
    match kind {
        TokenKind::Plus => Some(UnaryOp::Plus),
        TokenKind::Dash => Some(UnaryOp::Minus),
        _ => None,
    }
}
