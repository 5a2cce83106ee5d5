use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

/// Consumes the text matched by a pattern. `Ok(None)` means the text is skipped.
pub type RegexHandler = fn(&mut Lexer, &str) -> Result<Option<Token>, Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Every pattern is anchored to the current position.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^[0-9]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new(r"^\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new(r"^\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new(r"^\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new(r"^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new(r"^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new(r"^\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
    ];
}

/// Produces tokens on demand from a borrowed source string.
///
/// Once the input is exhausted every call to [`Lexer::next_token`] returns an
/// `EOF` token positioned at the end of the source.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer { source, pos: 0 }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn get_position(&self) -> Position {
        Position(self.pos)
    }

    pub fn next_token(&mut self) -> Result<Token, Error> {
        while !self.at_eof() {
            let remaining = self.remainder();
            let matched = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(remaining)
                    .map(|found| (pattern.handler, found.as_str()))
            });

            let Some((handler, text)) = matched else {
                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken { token: self.at() },
                    self.get_position(),
                ));
            };

            if let Some(token) = handler(self, text)? {
                trace!(kind = ?token.kind, start = token.span.start.0, end = token.span.end.0, "token");
                return Ok(token);
            }
        }

        Ok(MK_TOKEN!(
            TokenKind::EOF,
            Span {
                start: self.get_position(),
                end: self.get_position()
            }
        ))
    }
}

fn number_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    let start = lexer.get_position();
    let value = matched.parse::<i64>().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: matched.to_string(),
            },
            start,
        )
    })?;

    lexer.advance_n(matched.len());
    Ok(Some(MK_TOKEN!(
        TokenKind::Number(value),
        Span {
            start,
            end: lexer.get_position()
        }
    )))
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    lexer.advance_n(matched.len());
    Ok(None)
}

/// Lexes the whole source, including the trailing `EOF` token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token()?;
        let done = token.is_eof();
        tokens.push(token);

        if done {
            return Ok(tokens);
        }
    }
}
