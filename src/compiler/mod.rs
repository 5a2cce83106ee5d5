//! Code generation module for the compiler.
//!
//! This module lowers the expression tree into textual LLVM IR. It handles:
//!
//! - Compilation of expressions into `i64` instructions on virtual registers
//! - Folding of unary minus on immediates
//! - The print and exit-code module layouts

pub mod compiler;
pub mod expr;
pub mod ir;
