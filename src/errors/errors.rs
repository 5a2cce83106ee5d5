use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A compile error anchored at a byte offset in the source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error} (at byte {})", .position.0)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Which compilation phase rejected the input.
    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } | ErrorImpl::NumberParseError { .. } => {
                ErrorKind::Lexical
            }
            ErrorImpl::UnexpectedToken { .. } | ErrorImpl::TrailingInput { .. } => {
                ErrorKind::Syntax
            }
            ErrorImpl::NestingTooDeep { .. } => ErrorKind::NestingTooDeep,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::TrailingInput { .. } => "TrailingInput",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnexpectedToken { expected, found } => {
                ErrorTip::Suggestion(format!("Expected {}, found {}", expected, found))
            }
            ErrorImpl::TrailingInput { found } => ErrorTip::Suggestion(format!(
                "Unexpected {} after a complete expression, did you miss an operator?",
                found
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Parentheses and unary operators nest deeper than {} levels",
                limit
            )),
        }
    }
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The lexer met a character or literal it cannot turn into a token.
    Lexical,
    /// The token stream does not form an expression.
    Syntax,
    /// The configured nesting limit was exceeded.
    NestingTooDeep,
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: char },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("unexpected token: expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },
    #[error("trailing input after expression: {found}")]
    TrailingInput { found: String },
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
