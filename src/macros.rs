//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler for single-character tokens

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number(42), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $span:expr) => {
        Token {
            kind: $kind,
            span: $span,
        }
    };
}

/// Creates a lexer handler for a token that is exactly `$value`.
///
/// The generated handler advances the lexer past `$value` and yields a token
/// of kind `$kind` spanning it.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new(r"^\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {{
        fn handler(lexer: &mut Lexer, _matched: &str) -> Result<Option<Token>, Error> {
            let start = Position(lexer.pos);
            lexer.advance_n($value.len());
            Ok(Some(MK_TOKEN!(
                $kind,
                Span {
                    start,
                    end: Position(lexer.pos),
                }
            )))
        }

        handler
    }};
}
