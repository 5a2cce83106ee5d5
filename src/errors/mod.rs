//! Error types and error handling for the compiler.
//!
//! This module defines the errors the front end can report:
//!
//! - Error structures with source position information
//! - Lexical, syntax and nesting-limit variants
//! - Error names and suggestions used when rendering diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
