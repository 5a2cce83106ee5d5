//! Lexical analysis module for the compiler.
//!
//! This module contains the lexer that turns expression source into tokens
//! one at a time as the parser asks for them. It handles:
//!
//! - Tokenization using a table of anchored regex patterns
//! - Integer literals and the arithmetic operators
//! - Token position tracking for error reporting
//! - Whitespace skipping

pub mod lexer;
pub mod tokens;
