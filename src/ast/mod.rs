/// AST (Abstract Syntax Tree) module
/// Contains the expression tree produced by the parser
///
/// Submodules:
/// - expressions: the `Expr` sum type and its operators
pub mod expressions;
