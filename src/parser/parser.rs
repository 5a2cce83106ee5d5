//! Parser state and the parsing entry points.
//!
//! The parser owns the lexer and keeps exactly one token of lookahead. Tokens
//! are pulled from the lexer as the expression functions in `expr` consume
//! them, so a lexical error surfaces only when the parser reaches it.

use tracing::debug;

use crate::{
    ast::expressions::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    options::DEFAULT_MAX_DEPTH,
    Position,
};

use super::{expr::parse_expr, lookups::BindingPower};

/// The main parser structure that maintains parsing state.
pub struct Parser<'a> {
    /// Token source
    lexer: Lexer<'a>,
    /// The single lookahead token
    current: Token,
    /// Open parentheses and unary operators around the current position
    depth: usize,
    /// Largest allowed `depth`
    max_depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser positioned on the first token of `source`.
    pub fn new(source: &'a str, max_depth: usize) -> Result<Self, Error> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;

        Ok(Parser {
            lexer,
            current,
            depth: 0,
            max_depth,
        })
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Advances to the next token and returns the previous one.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consumes the current token if it is `expected_kind`.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            Err(self.unexpected(&expected_kind.to_string()))
        } else {
            self.advance()
        }
    }

    /// Builds an `UnexpectedToken` error for the current token.
    pub fn unexpected(&self, expected: &str) -> Error {
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected: expected.to_string(),
                found: self.current.kind.to_string(),
            },
            self.get_position(),
        )
    }

    /// Enters one level of nesting, failing once `max_depth` is exceeded.
    pub fn enter_nested(&mut self) -> Result<(), Error> {
        if self.depth >= self.max_depth {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: self.max_depth,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn exit_nested(&mut self) {
        self.depth -= 1;
    }

    /// Returns the start of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start
    }
}

/// Parses `source` as one complete expression.
///
/// ```
/// use tinyexpr::parse;
///
/// assert_eq!(parse("1+2*3").unwrap().to_string(), "(+ 1 (* 2 3))");
/// ```
pub fn parse(source: &str) -> Result<Expr, Error> {
    parse_with_limit(source, DEFAULT_MAX_DEPTH)
}

/// Like [`parse`], failing with `NestingTooDeep` when parentheses and unary
/// operators nest more than `max_depth` levels.
pub fn parse_with_limit(source: &str, max_depth: usize) -> Result<Expr, Error> {
    let mut parser = Parser::new(source, max_depth)?;
    let expr = parse_expr(&mut parser, BindingPower::Default)?;

    if parser.current_token_kind() != TokenKind::EOF {
        return Err(Error::new(
            ErrorImpl::TrailingInput {
                found: parser.current_token_kind().to_string(),
            },
            parser.get_position(),
        ));
    }

    debug!(ast = %expr, "parsed expression");
    Ok(expr)
}
