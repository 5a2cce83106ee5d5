//! Parser module for building the expression tree.
//!
//! This module contains the parser that consumes tokens from the lexer and
//! builds an `Expr`. Expressions are parsed with NUD (null denotation)
//! handlers for operands and binding powers for infix precedence, which
//! yields the usual grammar:
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := factor (('*' | '/') factor)*
//! factor := NUMBER | '(' expr ')' | ('+' | '-') factor
//! ```

pub mod expr;
pub mod lookups;
pub mod parser;

#[cfg(test)]
mod tests;
