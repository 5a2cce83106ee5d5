use std::fmt::Display;

use crate::Span;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number(i64),

    OpenParen,
    CloseParen,

    Plus,
    Dash,
    Slash,
    Star,
}

/// Describes the token the way diagnostics refer to it.
impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::EOF => write!(f, "end of input"),
            TokenKind::Number(value) => write!(f, "number `{}`", value),
            TokenKind::OpenParen => write!(f, "`(`"),
            TokenKind::CloseParen => write!(f, "`)`"),
            TokenKind::Plus => write!(f, "`+`"),
            TokenKind::Dash => write!(f, "`-`"),
            TokenKind::Slash => write!(f, "`/`"),
            TokenKind::Star => write!(f, "`*`"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?} {}..{}",
            self.kind, self.span.start.0, self.span.end.0
        )
    }
}

impl Token {
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }
}
